//! Menu request payloads

use serde::Deserialize;
use validator::Validate;

use super::menu::MenuType;

/// Tree query filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuTreeReq {
    #[serde(default)]
    pub name: Option<String>,
}

impl MenuTreeReq {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }

    /// The name needle, if one was given.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MenuCreateReq {
    #[serde(default)]
    #[validate(length(max = 32, message = "Parent id too long"))]
    pub parent_id: String,

    #[validate(length(min = 1, max = 64, message = "Menu name must be between 1 and 64 characters"))]
    pub name: String,

    #[serde(default)]
    pub sort: i32,

    #[serde(default)]
    pub menu_type: MenuType,

    #[serde(default)]
    #[validate(length(max = 255, message = "Menu path too long"))]
    pub path: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Menu component too long"))]
    pub component: String,

    #[serde(default)]
    #[validate(length(max = 64, message = "Menu icon too long"))]
    pub icon: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "Menu permission too long"))]
    pub permission: String,

    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MenuUpdateReq {
    #[validate(length(min = 1, max = 32, message = "Menu id is required"))]
    pub id: String,

    #[serde(default)]
    #[validate(length(max = 32, message = "Parent id too long"))]
    pub parent_id: String,

    #[validate(length(min = 1, max = 64, message = "Menu name must be between 1 and 64 characters"))]
    pub name: String,

    #[serde(default)]
    pub sort: i32,

    #[serde(default)]
    pub menu_type: MenuType,

    #[serde(default)]
    #[validate(length(max = 255, message = "Menu path too long"))]
    pub path: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Menu component too long"))]
    pub component: String,

    #[serde(default)]
    #[validate(length(max = 64, message = "Menu icon too long"))]
    pub icon: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "Menu permission too long"))]
    pub permission: String,

    #[serde(default)]
    pub hidden: bool,
}
