//! # Menu API
//! 
//! HTTP handlers, routing, and response envelopes for menu management.

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
