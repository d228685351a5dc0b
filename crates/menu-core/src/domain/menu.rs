// ============================================================================
// Menu Core - Menu Entity
// File: crates/menu-core/src/domain/menu.rs
// Description: Menu hierarchy entity and its simplified projection
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use menu_shared::constants::ROOT_PARENT_ID;
use menu_shared::new_id;

use super::menu_request::{MenuCreateReq, MenuUpdateReq};

/// Menu type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuType {
    Category,
    Page,
    Button,
}

impl MenuType {
    pub fn as_i16(&self) -> i16 {
        match self {
            MenuType::Category => 1,
            MenuType::Page => 2,
            MenuType::Button => 3,
        }
    }

    pub fn from_i16(value: i16) -> Option<Self> {
        match value {
            1 => Some(MenuType::Category),
            2 => Some(MenuType::Page),
            3 => Some(MenuType::Button),
            _ => None,
        }
    }
}

impl Default for MenuType {
    fn default() -> Self {
        MenuType::Page
    }
}

/// Menu entity
///
/// Stored flat with a parent pointer; `children` is only populated once the
/// records have been assembled into a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    /// Empty for top-level menus.
    pub parent_id: String,
    pub name: String,
    pub sort: i32,
    pub menu_type: MenuType,
    pub path: String,
    pub component: String,
    pub icon: String,
    pub permission: String,
    pub hidden: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub removed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub children: Vec<Menu>,
}

impl Menu {
    pub fn from_create(req: MenuCreateReq) -> Self {
        Self {
            id: new_id(),
            parent_id: req.parent_id.trim().to_string(),
            name: req.name.trim().to_string(),
            sort: req.sort,
            menu_type: req.menu_type,
            path: req.path.trim().to_string(),
            component: req.component.trim().to_string(),
            icon: req.icon.trim().to_string(),
            permission: req.permission.trim().to_string(),
            hidden: req.hidden,
            created_at: Utc::now(),
            modified_at: None,
            removed_at: None,
            children: Vec::new(),
        }
    }

    /// Builds the record written by an update. `created_at` is not persisted
    /// on update, so the value carried here is ignored by the store.
    pub fn from_update(req: MenuUpdateReq) -> Self {
        let now = Utc::now();
        Self {
            id: req.id.trim().to_string(),
            parent_id: req.parent_id.trim().to_string(),
            name: req.name.trim().to_string(),
            sort: req.sort,
            menu_type: req.menu_type,
            path: req.path.trim().to_string(),
            component: req.component.trim().to_string(),
            icon: req.icon.trim().to_string(),
            permission: req.permission.trim().to_string(),
            hidden: req.hidden,
            created_at: now,
            modified_at: Some(now),
            removed_at: None,
            children: Vec::new(),
        }
    }

    pub fn is_root_menu(&self) -> bool {
        self.parent_id == ROOT_PARENT_ID
    }

    pub fn is_deleted(&self) -> bool {
        self.removed_at.is_some()
    }
}

/// Lightweight projection for navigation pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleMenu {
    pub id: String,
    pub name: String,
    pub children: Vec<SimpleMenu>,
}
