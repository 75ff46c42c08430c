//! HTTP API module for the roster engine.
//!
//! This module exposes the recomputation pipeline over a single REST
//! endpoint: a roster-grid snapshot goes in, the refreshed summary rows
//! come out.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RecomputeRequest;
pub use response::{ApiError, RecomputeResponse};
pub use state::AppState;
