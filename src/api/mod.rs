//! API layer module.
//!
//! HTTP handlers, middleware, and routing for the tax-ID worker.

pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
