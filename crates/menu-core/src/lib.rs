//! # Menu Core
//! 
//! Domain entities, tree assembly, services, and repository traits for the
//! admin menu service.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{MenuError, StoreOp};
