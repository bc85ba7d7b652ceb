//! Inbound message classification: greet, run the sharing pipeline, or ask for a link.

use crate::core::InboundMessage;

/// The command that triggers the greeting.
pub const START_COMMAND: &str = "/start";

/// Substring that marks a message as link-like. Not a URL check: malformed links are
/// accepted here and fail later in the pipeline.
pub const LINK_MARKER: &str = "http";

/// One article to submit to the sharing service. `article_url` is the whole message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharingRequest {
    pub article_url: String,
}

impl SharingRequest {
    pub fn new(article_url: impl Into<String>) -> Self {
        Self {
            article_url: article_url.into(),
        }
    }
}

/// Outcome of classifying one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Greet,
    RunPipeline(SharingRequest),
    Reject,
}

impl Route {
    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Greet => "greet",
            Route::RunPipeline(_) => "run_pipeline",
            Route::Reject => "reject",
        }
    }
}

/// Classifies a message. Pure: the same message and bot username always yield the same route.
///
/// `bot_username` is this bot's own username (from `getMe`); `/start@<name>` greets only when `<name>`
/// matches it.
pub fn classify(message: &InboundMessage, bot_username: Option<&str>) -> Route {
    classify_text(&message.text, bot_username)
}

/// Text-level classification used by [`classify`].
pub fn classify_text(text: &str, bot_username: Option<&str>) -> Route {
    if is_start_command(text, bot_username) {
        Route::Greet
    } else if text.contains(LINK_MARKER) {
        Route::RunPipeline(SharingRequest::new(text))
    } else {
        Route::Reject
    }
}

/// True for `/start`, `/start <payload>` and `/start@<bot_username>`. A start command addressed to
/// another bot, or to any bot while our username is unknown, is plain text.
fn is_start_command(text: &str, bot_username: Option<&str>) -> bool {
    let Some(first_word) = text.split_whitespace().next() else {
        return false;
    };
    match first_word.split_once('@') {
        None => first_word == START_COMMAND,
        Some((command, target)) => {
            command == START_COMMAND
                && bot_username.is_some_and(|own| own.eq_ignore_ascii_case(target))
        }
    }
}
