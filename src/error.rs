use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{API_NAME, RECORD_NOT_FOUND};
use crate::repository::StoreError;
use crate::validation::Violations;

pub const GENERIC_STORE_CODE: &str = "STORE_ERROR";
pub const GENERIC_STORE_MESSAGE: &str = "Internal database error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] Violations),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Record with id {id} not found")]
    NotFound { id: u64 },

    /// `expose` decides whether the raw backend error reaches the client.
    #[error("Database error: {source}")]
    Store {
        #[source]
        source: StoreError,
        expose: bool,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(violations) => {
                if let Some(first) = violations.first() {
                    tracing::warn!("{} Validation error: {}", API_NAME, first.msg);
                }
                (StatusCode::BAD_REQUEST, Json(violations)).into_response()
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("{} Bad request: {}", API_NAME, msg);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error_message": msg })),
                )
                    .into_response()
            }
            AppError::NotFound { id } => {
                tracing::info!("{} Record with id {} not found!", API_NAME, id);
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "id": id, "error_message": RECORD_NOT_FOUND })),
                )
                    .into_response()
            }
            AppError::Store { source, expose } => {
                tracing::error!("{} Database error: {}", API_NAME, source);
                let body = if expose {
                    json!({ "error_code": source.code, "error_message": source.message })
                } else {
                    json!({ "error_code": GENERIC_STORE_CODE, "error_message": GENERIC_STORE_MESSAGE })
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
