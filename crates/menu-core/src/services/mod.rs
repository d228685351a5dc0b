//! Domain services (business logic)

pub mod menu_tree;
pub mod menu_service;

pub use menu_service::MenuService;
pub use menu_tree::{build_tree, filter_by_name, to_simple_forest};
