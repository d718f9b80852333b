use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::models::rejection::{Rejection, RejectionKind};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Rejected: {0}")]
    Rejected(Rejection),
    #[error("Internal server error: {0}")]
    InternalWithMsg(String),
}

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> Self {
        AppError::Rejected(rejection)
    }
}

impl AppError {
    /// Maps a sqlx failure raised by an insert, turning a unique-constraint
    /// violation into `Conflict` so callers never need to inspect driver codes.
    pub fn from_insert(err: sqlx::Error, what: &str) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(format!("{} already exists", what))
            }
            _ => AppError::Database(err),
        }
    }

    pub fn is_storage_unavailable(&self) -> bool {
        matches!(
            self,
            AppError::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            )
        )
    }
}

fn rejection_status(kind: RejectionKind) -> StatusCode {
    match kind {
        RejectionKind::MissingField
        | RejectionKind::InvalidIcon
        | RejectionKind::InvalidSubdomain => StatusCode::BAD_REQUEST,
        RejectionKind::SlugTaken => StatusCode::CONFLICT,
        RejectionKind::NotFound => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let unavailable = self.is_storage_unavailable();
        let (status, message) = match &self {
            AppError::Database(e) => {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return (
                            StatusCode::CONFLICT,
                            Json(json!({ "error": "Resource already exists (duplicate entry)" }))
                        ).into_response();
                    }
                }

                error!("Database error: {:?}", e);
                if unavailable {
                    (StatusCode::SERVICE_UNAVAILABLE, "Storage unavailable".to_string())
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
                }
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Rejected(rejection) => {
                warn!(kind = ?rejection.kind, subdomain = %rejection.subdomain, "request rejected");
                let body = Json(json!({
                    "success": false,
                    "error": rejection.message(),
                    "kind": rejection.kind,
                    "subdomain": rejection.subdomain,
                    "icon": rejection.icon,
                }));
                return (rejection_status(rejection.kind), body).into_response();
            }
            AppError::InternalWithMsg(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
