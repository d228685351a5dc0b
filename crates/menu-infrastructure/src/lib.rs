//! # Menu Infrastructure
//! 
//! Database implementations (adapters).

pub mod database;

pub use database::{create_pool, run_migrations, PgMenuRepository};
