//! Router assembly

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, menu};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Menu routes
        .route("/api/v1/menus", get(menu::tree).post(menu::create).put(menu::save))
        .route("/api/v1/menus/tree", get(menu::tree))
        .route("/api/v1/menus/simple-tree", get(menu::simple_tree))
        .route("/api/v1/menus/role/{role_id}", get(menu::tree_by_role))
        .route("/api/v1/menus/{id}", delete(menu::delete))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
