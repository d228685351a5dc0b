//! # Menu Shared
//! 
//! Shared utilities, types, and telemetry for the admin menu service.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
