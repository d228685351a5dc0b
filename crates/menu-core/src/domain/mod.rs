//! # Menu Core - Domain Module
//! 
//! Domain entities for the admin menu service.

pub mod menu;
pub mod menu_request;

// Re-export all entities and enums
pub use menu::{Menu, MenuType, SimpleMenu};
pub use menu_request::{MenuCreateReq, MenuTreeReq, MenuUpdateReq};
