// ============================================================================
// Menu Core - Menu Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Menu tree queries and menu create/update/delete with referential checks

use std::sync::Arc;
use tracing::{debug, error, info, warn};
use validator::Validate;

use crate::domain::{Menu, MenuCreateReq, MenuTreeReq, MenuType, MenuUpdateReq, SimpleMenu};
use crate::error::MenuError;
use crate::repositories::MenuRepository;
use super::menu_tree::{build_tree, filter_by_name, to_simple_forest};

/// Menu service over any repository implementation
pub struct MenuService<R: MenuRepository + ?Sized> {
    menu_repo: Arc<R>,
}

impl<R: MenuRepository + ?Sized> MenuService<R> {
    pub fn new(menu_repo: Arc<R>) -> Self {
        Self { menu_repo }
    }

    /// Full menu tree, optionally filtered by name
    pub async fn tree(&self, req: &MenuTreeReq) -> Result<Vec<Menu>, MenuError> {
        let menus = self.menu_repo.list_all().await.map_err(|e| {
            error!("Failed to list menus: {}", e);
            e
        })?;
        if menus.is_empty() {
            return Ok(Vec::new());
        }

        let tree = build_tree(menus);
        Ok(match req.name_filter() {
            Some(name) => filter_by_name(name, tree),
            None => tree,
        })
    }

    /// Id/name-only projection of `tree`
    pub async fn simple_tree(&self, req: &MenuTreeReq) -> Result<Vec<SimpleMenu>, MenuError> {
        let tree = self.tree(req).await?;
        Ok(to_simple_forest(&tree))
    }

    /// Menu tree granted to a role. An empty role id yields an empty tree
    /// without touching the store.
    pub async fn tree_by_role(&self, role_id: &str) -> Result<Vec<Menu>, MenuError> {
        if role_id.is_empty() {
            return Ok(Vec::new());
        }

        let menus = self.menu_repo.list_by_role(role_id).await.map_err(|e| {
            error!("Failed to list menus of role {}: {}", role_id, e);
            e
        })?;
        Ok(build_tree(menus))
    }

    pub async fn has_children(&self, id: &str) -> Result<bool, MenuError> {
        self.menu_repo.exists_child_of(id).await
    }

    /// Create a menu
    pub async fn create(&self, req: MenuCreateReq) -> Result<Menu, MenuError> {
        req.validate()?;

        let menu = Menu::from_create(req);
        self.menu_repo.insert(&menu).await.map_err(|e| {
            error!("Failed to create menu {}: {}", menu.name, e);
            e
        })?;

        info!("Menu created: {} ({})", menu.id, menu.name);
        Ok(menu)
    }

    /// Update a menu in place
    pub async fn save(&self, req: MenuUpdateReq) -> Result<(), MenuError> {
        req.validate()?;

        let menu = Menu::from_update(req);
        if menu.parent_id == menu.id {
            return Err(MenuError::Validation(format!(
                "Menu {} cannot be its own parent",
                menu.id
            )));
        }

        let affected = self.menu_repo.update_by_id(&menu).await.map_err(|e| {
            error!("Failed to update menu {}: {}", menu.id, e);
            e
        })?;
        if affected == 0 {
            warn!("Update skipped: menu not found: {}", menu.id);
            return Err(MenuError::NotFound(menu.id));
        }

        info!("Menu updated: {}", menu.id);
        Ok(())
    }

    /// Delete a childless menu together with its role associations.
    ///
    /// All steps share one transaction; any error drops the unit of work and
    /// leaves the store untouched.
    pub async fn delete(&self, id: &str) -> Result<(), MenuError> {
        info!("Delete requested for menu: {}", id);

        let mut uow = self.menu_repo.begin().await?;

        // 1. Menu must exist
        let menu_type = uow
            .find_menu_type(id)
            .await?
            .ok_or_else(|| {
                warn!("Delete refused: menu not found: {}", id);
                MenuError::NotFound(id.to_string())
            })?;

        // 2. Menus with children cannot be deleted
        if let Some(child_id) = uow.find_child_id(id).await? {
            warn!("Delete refused: menu {} has child {}", id, child_id);
            return Err(MenuError::HasChildren {
                menu_id: id.to_string(),
                child_id,
            });
        }

        // 3. Drop role associations
        let cleared = uow
            .clear_role_associations(id)
            .await
            .map_err(|e| {
                error!("Failed to clear role associations of menu {}: {}", id, e);
                MenuError::AssociationClear {
                    menu_id: id.to_string(),
                    message: e.to_string(),
                }
            })?;
        if menu_type == MenuType::Button {
            debug!("Removing button menu {} ({} role links)", id, cleared);
        }

        // 4. Delete the menu itself
        let affected = uow.delete_by_id(id).await?;
        if affected == 0 {
            return Err(MenuError::NotFound(id.to_string()));
        }

        uow.commit().await?;
        info!("Menu deleted: {} ({} role links cleared)", id, cleared);
        Ok(())
    }
}
