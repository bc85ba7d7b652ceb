//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the final reply so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no reply.
    Stop,
    /// Stop the chain; the final text sent to the user.
    Reply(String),
}
