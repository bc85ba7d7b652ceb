//! Integration tests for [`summary_bot::HandlerChain`].
//!
//! Covers phase order, a before() veto, Reply ending the handle phase and reaching after(), and error
//! propagation out of handle().

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use common::make_message;
use summary_bot::{Handler, HandlerChain, HandlerResponse, InboundMessage, RelayError};

type Journal = Arc<Mutex<Vec<String>>>;

/// Records every phase it sees as "<phase>_<name>"; `handle` answers with `response`.
struct PhaseRecorder {
    name: &'static str,
    journal: Journal,
    response: HandlerResponse,
}

impl PhaseRecorder {
    fn new(name: &'static str, journal: &Journal, response: HandlerResponse) -> Arc<Self> {
        Arc::new(Self {
            name,
            journal: journal.clone(),
            response,
        })
    }

    fn push(&self, phase: &str) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}_{}", phase, self.name));
    }
}

#[async_trait]
impl Handler for PhaseRecorder {
    async fn before(&self, _message: &InboundMessage) -> summary_bot::Result<bool> {
        self.push("before");
        Ok(true)
    }

    async fn handle(&self, _message: &InboundMessage) -> summary_bot::Result<HandlerResponse> {
        self.push("handle");
        Ok(self.response.clone())
    }

    async fn after(
        &self,
        _message: &InboundMessage,
        response: &HandlerResponse,
    ) -> summary_bot::Result<()> {
        self.push(&format!("after({:?})", response));
        Ok(())
    }
}

/// **Test: before runs first→last, handle runs until a Reply, after runs last→first.**
#[tokio::test]
async fn test_phases_run_in_order() {
    let journal: Journal = Arc::default();
    let chain = HandlerChain::new()
        .add_handler(PhaseRecorder::new("log", &journal, HandlerResponse::Continue))
        .add_handler(PhaseRecorder::new(
            "summary",
            &journal,
            HandlerResponse::Reply("Text:\nok".to_string()),
        ))
        .add_handler(PhaseRecorder::new("unreached", &journal, HandlerResponse::Continue));

    let result = chain.handle(&make_message("http://example.com")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("Text:\nok".to_string()));
    let reply = r#"Reply("Text:\nok")"#;
    assert_eq!(
        *journal.lock().unwrap(),
        vec![
            "before_log".to_string(),
            "before_summary".to_string(),
            "before_unreached".to_string(),
            "handle_log".to_string(),
            "handle_summary".to_string(),
            format!("after({})_unreached", reply),
            format!("after({})_summary", reply),
            format!("after({})_log", reply),
        ]
    );
}

/// **Test: a before() returning false stops the chain with Stop; no handle or after runs.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct Gate;

    #[async_trait]
    impl Handler for Gate {
        async fn before(&self, _message: &InboundMessage) -> summary_bot::Result<bool> {
            Ok(false)
        }
    }

    let journal: Journal = Arc::default();
    let chain = HandlerChain::new()
        .add_handler(Arc::new(Gate))
        .add_handler(PhaseRecorder::new("summary", &journal, HandlerResponse::Continue));

    let result = chain.handle(&make_message("hello")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert!(journal.lock().unwrap().is_empty());
}

/// **Test: when every handler continues, the chain returns Continue and after still runs.**
#[tokio::test]
async fn test_all_continue_returns_continue() {
    let journal: Journal = Arc::default();
    let chain = HandlerChain::new()
        .add_handler(PhaseRecorder::new("a", &journal, HandlerResponse::Continue))
        .add_handler(PhaseRecorder::new("b", &journal, HandlerResponse::Continue));

    let result = chain.handle(&make_message("hello")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    let journal = journal.lock().unwrap();
    assert_eq!(journal.len(), 6);
    assert_eq!(journal[4], "after(Continue)_b");
    assert_eq!(journal[5], "after(Continue)_a");
}

/// **Test: an error from handle() is returned to the caller and skips the after phase.**
#[tokio::test]
async fn test_handle_error_propagates() {
    struct Failing {
        after_count: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handler for Failing {
        async fn handle(&self, _message: &InboundMessage) -> summary_bot::Result<HandlerResponse> {
            Err(RelayError::Bot("chat not found".to_string()))
        }

        async fn after(
            &self,
            _message: &InboundMessage,
            _response: &HandlerResponse,
        ) -> summary_bot::Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    let after_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new().add_handler(Arc::new(Failing {
        after_count: after_count.clone(),
    }));

    let err = chain.handle(&make_message("hello")).await.unwrap_err();

    assert!(err.to_string().contains("chat not found"));
    assert_eq!(after_count.load(Ordering::SeqCst), 0);
}
