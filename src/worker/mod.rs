//! Background worker for file reads.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: the Zellij worker that serves those requests

pub mod handler;
pub mod messages;

pub use handler::RecipeWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
