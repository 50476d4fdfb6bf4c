//! HTTP boundary around the extraction pipeline and the comparison engine.
//!
//! Routes are nested under `/api/`. `api_router()` returns a composable
//! `Router`; `start_server_on()` runs it on a background task.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server_on, ServerHandle, ServerSession};
pub use types::ApiContext;
