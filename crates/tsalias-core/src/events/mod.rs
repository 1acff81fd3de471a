//! Event system for tsalias.
//! The reporting collaborator handed to every component instead of a global logger.

pub mod dispatcher;
pub mod handler;
pub mod tracing_reporter;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::RewriteEventHandler;
pub use tracing_reporter::TracingReporter;
pub use types::*;
