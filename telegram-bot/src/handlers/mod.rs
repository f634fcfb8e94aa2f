//! Framework-level handlers shared by every bot built on this crate.

mod callback_ack;
mod logging_handler;

pub use callback_ack::CallbackAckHandler;
pub use logging_handler::LoggingHandler;
