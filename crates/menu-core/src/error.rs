//! Domain errors

use std::fmt;

use thiserror::Error;

/// Store operation that failed, used to classify `MenuError::Store`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Read,
    Create,
    Update,
    Delete,
}

impl StoreOp {
    pub fn code(&self) -> &'static str {
        match self {
            StoreOp::Read => "FAIL_READ",
            StoreOp::Create => "FAIL_CREATE",
            StoreOp::Update => "FAIL_UPDATE",
            StoreOp::Delete => "FAIL_DELETE",
        }
    }
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            StoreOp::Read => "read",
            StoreOp::Create => "create",
            StoreOp::Update => "update",
            StoreOp::Delete => "delete",
        };
        f.write_str(verb)
    }
}

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Menu not found: {0}")]
    NotFound(String),

    #[error("Menu {menu_id} has child menu [{child_id}] and cannot be deleted")]
    HasChildren { menu_id: String, child_id: String },

    #[error("Failed to clear role associations of menu {menu_id}: {message}")]
    AssociationClear { menu_id: String, message: String },

    #[error("Failed to {op} menu: {message}")]
    Store { op: StoreOp, message: String },
}

impl MenuError {
    pub fn store(op: StoreOp, cause: impl fmt::Display) -> Self {
        MenuError::Store { op, message: cause.to_string() }
    }

    /// Stable classification code handed to API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            MenuError::Validation(_) => "VALIDATION_ERROR",
            MenuError::NotFound(_) => "RECORD_NOT_FOUND",
            MenuError::HasChildren { .. } => "MENU_HAS_CHILDREN",
            MenuError::AssociationClear { .. } => "ASSOCIATION_CLEAR_FAILED",
            MenuError::Store { op, .. } => op.code(),
        }
    }
}

impl From<validator::ValidationErrors> for MenuError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MenuError::Validation(errors.to_string())
    }
}
