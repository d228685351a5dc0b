use std::sync::Arc;

use menu_core::repositories::MenuRepository;
use menu_core::services::MenuService;

#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<MenuService<dyn MenuRepository>>,
}

impl AppState {
    pub fn new(menu_repo: Arc<dyn MenuRepository>) -> Self {
        Self {
            menu_service: Arc::new(MenuService::new(menu_repo)),
        }
    }
}
