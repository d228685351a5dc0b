//! In-memory repository with copy-on-begin transactions, for service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use super::{MenuRepository, MenuUnitOfWork};
use crate::domain::{Menu, MenuType};
use crate::error::{MenuError, StoreOp};

#[derive(Debug, Clone, Default)]
pub(crate) struct State {
    pub menus: Vec<Menu>,
    /// (role_id, menu_id)
    pub role_links: Vec<(String, String)>,
}

impl State {
    fn live(&self) -> impl Iterator<Item = &Menu> {
        self.menus.iter().filter(|m| !m.is_deleted())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryMenuRepository {
    state: Arc<Mutex<State>>,
    fail_clear: bool,
}

impl InMemoryMenuRepository {
    pub fn with_menus(menus: Vec<Menu>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State { menus, role_links: Vec::new() })),
            fail_clear: false,
        }
    }

    pub fn link_role(&self, role_id: &str, menu_id: &str) {
        self.state
            .lock()
            .unwrap()
            .role_links
            .push((role_id.to_string(), menu_id.to_string()));
    }

    /// Makes every association clear fail, to exercise rollback.
    pub fn failing_clear(mut self) -> Self {
        self.fail_clear = true;
        self
    }

    pub fn snapshot(&self) -> State {
        self.state.lock().unwrap().clone()
    }
}

fn sorted(mut menus: Vec<Menu>) -> Vec<Menu> {
    menus.sort_by_key(|m| m.sort);
    menus
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn list_all(&self) -> Result<Vec<Menu>, MenuError> {
        let state = self.state.lock().unwrap();
        Ok(sorted(state.live().cloned().collect()))
    }

    async fn list_by_role(&self, role_id: &str) -> Result<Vec<Menu>, MenuError> {
        let state = self.state.lock().unwrap();
        let menus = state
            .live()
            .filter(|m| state.role_links.iter().any(|(r, id)| r == role_id && id == &m.id))
            .cloned()
            .collect();
        Ok(sorted(menus))
    }

    async fn exists_child_of(&self, parent_id: &str) -> Result<bool, MenuError> {
        let state = self.state.lock().unwrap();
        let exists = state.live().any(|m| m.parent_id == parent_id);
        Ok(exists)
    }

    async fn insert(&self, menu: &Menu) -> Result<(), MenuError> {
        let mut state = self.state.lock().unwrap();
        if state.menus.iter().any(|m| m.id == menu.id) {
            return Err(MenuError::store(StoreOp::Create, "duplicate key"));
        }
        state.menus.push(menu.clone());
        Ok(())
    }

    async fn update_by_id(&self, menu: &Menu) -> Result<u64, MenuError> {
        let mut state = self.state.lock().unwrap();
        match state.menus.iter_mut().find(|m| m.id == menu.id && !m.is_deleted()) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = menu.clone();
                existing.created_at = created_at;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn begin(&self) -> Result<Box<dyn MenuUnitOfWork>, MenuError> {
        let working = self.state.lock().unwrap().clone();
        Ok(Box::new(InMemoryUnitOfWork {
            target: Arc::clone(&self.state),
            working,
            fail_clear: self.fail_clear,
        }))
    }
}

struct InMemoryUnitOfWork {
    target: Arc<Mutex<State>>,
    working: State,
    fail_clear: bool,
}

#[async_trait]
impl MenuUnitOfWork for InMemoryUnitOfWork {
    async fn find_menu_type(&mut self, id: &str) -> Result<Option<MenuType>, MenuError> {
        Ok(self.working.live().find(|m| m.id == id).map(|m| m.menu_type))
    }

    async fn find_child_id(&mut self, parent_id: &str) -> Result<Option<String>, MenuError> {
        Ok(self
            .working
            .live()
            .find(|m| m.parent_id == parent_id)
            .map(|m| m.id.clone()))
    }

    async fn clear_role_associations(&mut self, menu_id: &str) -> Result<u64, MenuError> {
        let before = self.working.role_links.len();
        self.working.role_links.retain(|(_, id)| id != menu_id);
        if self.fail_clear {
            return Err(MenuError::store(StoreOp::Delete, "injected failure"));
        }
        Ok((before - self.working.role_links.len()) as u64)
    }

    async fn delete_by_id(&mut self, id: &str) -> Result<u64, MenuError> {
        let now = Utc::now();
        let mut affected = 0;
        for menu in self.working.menus.iter_mut().filter(|m| m.id == id && !m.is_deleted()) {
            menu.removed_at = Some(now);
            affected += 1;
        }
        Ok(affected)
    }

    async fn commit(self: Box<Self>) -> Result<(), MenuError> {
        let this = *self;
        *this.target.lock().unwrap() = this.working;
        Ok(())
    }
}
