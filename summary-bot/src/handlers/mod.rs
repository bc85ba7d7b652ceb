//! Handler implementations: inbound/outcome logging and the summary request handler.

mod logging;
mod summary_handler;

pub use logging::LoggingHandler;
pub use summary_handler::SummaryHandler;
