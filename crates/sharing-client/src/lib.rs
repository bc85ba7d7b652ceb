//! # Sharing service client
//!
//! Talks to the article sharing service: submits an article URL and receives a public sharing URL,
//! fetches the rendered sharing page, and reads the generated summary from its `description` meta tag.
//! Provides token masking for safe logging of the service credential.

mod client;
mod error;
mod generation;
mod page;

pub use client::{SharingClient, SharingService, DEFAULT_SHARING_API_URL};
pub use error::{FailureKind, SharingError};
pub use generation::GenerationReply;
pub use page::extract_description;

/// Masks a credential for safe logging: shows first 4 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the credential.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[len - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}
