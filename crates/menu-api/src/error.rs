//! Menu error to HTTP response mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use menu_core::error::MenuError;

use crate::response::ApiResponse;

pub struct ApiError(pub MenuError);

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            MenuError::Validation(_) => StatusCode::BAD_REQUEST,
            MenuError::NotFound(_) => StatusCode::NOT_FOUND,
            MenuError::HasChildren { .. } => StatusCode::CONFLICT,
            MenuError::AssociationClear { .. } | MenuError::Store { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();
        if status.is_server_error() {
            tracing::error!("{}: {}", self.0.code(), message);
        } else {
            tracing::warn!("{}: {}", self.0.code(), message);
        }

        let body = Json(ApiResponse::<()>::error(self.0.code(), &message));
        (status, body).into_response()
    }
}
