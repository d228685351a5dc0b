//! Menu repository traits (ports)

use async_trait::async_trait;

use crate::domain::{Menu, MenuType};
use crate::error::MenuError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All live menus ordered by sort key.
    async fn list_all(&self) -> Result<Vec<Menu>, MenuError>;

    /// Menus linked to a role, ordered by sort key.
    async fn list_by_role(&self, role_id: &str) -> Result<Vec<Menu>, MenuError>;

    async fn exists_child_of(&self, parent_id: &str) -> Result<bool, MenuError>;

    async fn insert(&self, menu: &Menu) -> Result<(), MenuError>;

    /// Overwrites every column but `created_at`; returns rows affected.
    async fn update_by_id(&self, menu: &Menu) -> Result<u64, MenuError>;

    async fn begin(&self) -> Result<Box<dyn MenuUnitOfWork>, MenuError>;
}

/// A store transaction. Dropping it without `commit` rolls it back.
#[async_trait]
pub trait MenuUnitOfWork: Send {
    async fn find_menu_type(&mut self, id: &str) -> Result<Option<MenuType>, MenuError>;

    /// Id of any one live child of `parent_id`.
    async fn find_child_id(&mut self, parent_id: &str) -> Result<Option<String>, MenuError>;

    async fn clear_role_associations(&mut self, menu_id: &str) -> Result<u64, MenuError>;

    async fn delete_by_id(&mut self, id: &str) -> Result<u64, MenuError>;

    async fn commit(self: Box<Self>) -> Result<(), MenuError>;
}
