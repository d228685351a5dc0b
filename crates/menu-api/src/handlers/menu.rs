// ============================================================================
// Menu API - Menu Handlers
// File: crates/menu-api/src/handlers/menu.rs
// ============================================================================
//! Menu tree and menu CRUD HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use menu_core::domain::{Menu, MenuCreateReq, MenuTreeReq, MenuUpdateReq, SimpleMenu};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Menu tree handler - GET /api/v1/menus/tree?name=
pub async fn tree(
    State(state): State<AppState>,
    Query(req): Query<MenuTreeReq>,
) -> ApiResult<Vec<Menu>> {
    let tree = state.menu_service.tree(&req).await?;
    Ok(Json(ApiResponse::success(tree)))
}

/// Simple menu tree handler - GET /api/v1/menus/simple-tree?name=
pub async fn simple_tree(
    State(state): State<AppState>,
    Query(req): Query<MenuTreeReq>,
) -> ApiResult<Vec<SimpleMenu>> {
    let tree = state.menu_service.simple_tree(&req).await?;
    Ok(Json(ApiResponse::success(tree)))
}

/// Role menu tree handler - GET /api/v1/menus/role/{role_id}
pub async fn tree_by_role(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<Vec<Menu>> {
    let tree = state.menu_service.tree_by_role(role_id.trim()).await?;
    Ok(Json(ApiResponse::success(tree)))
}

/// Create handler - POST /api/v1/menus
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MenuCreateReq>,
) -> Result<(StatusCode, Json<ApiResponse<Menu>>), ApiError> {
    let menu = state.menu_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(menu))))
}

/// Update handler - PUT /api/v1/menus
pub async fn save(
    State(state): State<AppState>,
    Json(payload): Json<MenuUpdateReq>,
) -> ApiResult<()> {
    state.menu_service.save(payload).await?;
    Ok(Json(ApiResponse::success(())))
}

/// Delete handler - DELETE /api/v1/menus/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.menu_service.delete(&id).await?;
    Ok(Json(ApiResponse::success(())))
}
