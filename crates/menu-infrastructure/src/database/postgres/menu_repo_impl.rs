// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::{debug, error, info};

use menu_core::domain::{Menu, MenuType};
use menu_core::error::{MenuError, StoreOp};
use menu_core::repositories::{MenuRepository, MenuUnitOfWork};

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    pub sort: i32,
    pub menu_type: i16,
    pub path: String,
    pub component: String,
    pub icon: String,
    pub permission: String,
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub removed_at: Option<DateTime<Utc>>,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            parent_id: row.parent_id,
            name: row.name,
            sort: row.sort,
            menu_type: MenuType::from_i16(row.menu_type).unwrap_or_default(),
            path: row.path,
            component: row.component,
            icon: row.icon,
            permission: row.permission,
            hidden: row.hidden,
            created_at: row.created_at,
            modified_at: row.modified_at,
            removed_at: row.removed_at,
            children: Vec::new(),
        }
    }
}

fn db_error(op: StoreOp, what: &'static str) -> impl FnOnce(sqlx::Error) -> MenuError {
    move |e| {
        error!("Database error {}: {}", what, e);
        MenuError::store(op, e)
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list_all(&self) -> Result<Vec<Menu>, MenuError> {
        let rows: Vec<MenuRow> = sqlx::query_as(
            r#"
            SELECT
                id, parent_id, name, sort, menu_type,
                path, component, icon, permission, hidden,
                created_at, modified_at, removed_at
            FROM sys_menus
            WHERE removed_at IS NULL
            ORDER BY sort, created_at
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error(StoreOp::Read, "listing menus"))?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }

    async fn list_by_role(&self, role_id: &str) -> Result<Vec<Menu>, MenuError> {
        let rows: Vec<MenuRow> = sqlx::query_as(
            r#"
            SELECT
                m.id, m.parent_id, m.name, m.sort, m.menu_type,
                m.path, m.component, m.icon, m.permission, m.hidden,
                m.created_at, m.modified_at, m.removed_at
            FROM sys_menus m
            JOIN sys_role_sys_menus rm
                ON rm.sys_menu_id = m.id AND rm.sys_role_id = $1
            WHERE m.removed_at IS NULL
            ORDER BY m.sort, m.created_at
            "#
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error(StoreOp::Read, "listing role menus"))?;

        debug!("Role {} has {} menus", role_id, rows.len());
        Ok(rows.into_iter().map(Menu::from).collect())
    }

    async fn exists_child_of(&self, parent_id: &str) -> Result<bool, MenuError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM sys_menus WHERE parent_id = $1 AND removed_at IS NULL)"
        )
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error(StoreOp::Read, "probing child menus"))
    }

    async fn insert(&self, menu: &Menu) -> Result<(), MenuError> {
        info!("Inserting menu: {}", menu.name);

        sqlx::query(
            r#"
            INSERT INTO sys_menus (
                id, parent_id, name, sort, menu_type,
                path, component, icon, permission, hidden,
                created_at, modified_at, removed_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#
        )
        .bind(&menu.id)
        .bind(&menu.parent_id)
        .bind(&menu.name)
        .bind(menu.sort)
        .bind(menu.menu_type.as_i16())
        .bind(&menu.path)
        .bind(&menu.component)
        .bind(&menu.icon)
        .bind(&menu.permission)
        .bind(menu.hidden)
        .bind(menu.created_at)
        .bind(menu.modified_at)
        .bind(menu.removed_at)
        .execute(&self.pool)
        .await
        .map_err(db_error(StoreOp::Create, "inserting menu"))?;

        Ok(())
    }

    async fn update_by_id(&self, menu: &Menu) -> Result<u64, MenuError> {
        let result = sqlx::query(
            r#"
            UPDATE sys_menus
            SET
                parent_id = $2,
                name = $3,
                sort = $4,
                menu_type = $5,
                path = $6,
                component = $7,
                icon = $8,
                permission = $9,
                hidden = $10,
                modified_at = $11
            WHERE id = $1 AND removed_at IS NULL
            "#
        )
        .bind(&menu.id)
        .bind(&menu.parent_id)
        .bind(&menu.name)
        .bind(menu.sort)
        .bind(menu.menu_type.as_i16())
        .bind(&menu.path)
        .bind(&menu.component)
        .bind(&menu.icon)
        .bind(&menu.permission)
        .bind(menu.hidden)
        .bind(menu.modified_at)
        .execute(&self.pool)
        .await
        .map_err(db_error(StoreOp::Update, "updating menu"))?;

        Ok(result.rows_affected())
    }

    async fn begin(&self) -> Result<Box<dyn MenuUnitOfWork>, MenuError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(db_error(StoreOp::Delete, "starting transaction"))?;
        Ok(Box::new(PgMenuUnitOfWork { tx }))
    }
}

/// Transaction-scoped menu operations. Rolled back by sqlx on drop.
pub struct PgMenuUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl MenuUnitOfWork for PgMenuUnitOfWork {
    async fn find_menu_type(&mut self, id: &str) -> Result<Option<MenuType>, MenuError> {
        let menu_type: Option<i16> = sqlx::query_scalar(
            "SELECT menu_type FROM sys_menus WHERE id = $1 AND removed_at IS NULL FOR UPDATE"
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(db_error(StoreOp::Read, "finding menu type"))?;

        Ok(menu_type.map(|t| MenuType::from_i16(t).unwrap_or_default()))
    }

    async fn find_child_id(&mut self, parent_id: &str) -> Result<Option<String>, MenuError> {
        sqlx::query_scalar::<_, String>(
            "SELECT id FROM sys_menus WHERE parent_id = $1 AND removed_at IS NULL LIMIT 1"
        )
        .bind(parent_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(db_error(StoreOp::Read, "checking child menus"))
    }

    async fn clear_role_associations(&mut self, menu_id: &str) -> Result<u64, MenuError> {
        let result = sqlx::query("DELETE FROM sys_role_sys_menus WHERE sys_menu_id = $1")
            .bind(menu_id)
            .execute(&mut *self.tx)
            .await
            .map_err(db_error(StoreOp::Delete, "clearing role associations"))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&mut self, id: &str) -> Result<u64, MenuError> {
        let result = sqlx::query(
            "UPDATE sys_menus SET removed_at = NOW() WHERE id = $1 AND removed_at IS NULL"
        )
        .bind(id)
        .execute(&mut *self.tx)
        .await
        .map_err(db_error(StoreOp::Delete, "deleting menu"))?;

        Ok(result.rows_affected())
    }

    async fn commit(self: Box<Self>) -> Result<(), MenuError> {
        self.tx
            .commit()
            .await
            .map_err(db_error(StoreOp::Delete, "committing transaction"))
    }
}
