use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealmate_grocery::{ExportError, ExportFormat};
use serde_json::json;
use strum::VariantArray;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("Unreadable request body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            // Clients only ever see the generic failure, details stay in the logs
            AppError::InvalidRequest(e) => {
                tracing::warn!("Rejected grocery list request: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate grocery list".to_string(),
                )
            }
            AppError::UnreadableBody(rejection) => {
                tracing::warn!("Unreadable request body: {}", rejection.body_text());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate grocery list".to_string(),
                )
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate grocery list".to_string(),
                )
            }
            AppError::UnknownFormat(format) => {
                let expected = ExportFormat::VARIANTS
                    .iter()
                    .map(|f| f.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Unknown export format '{format}', expected one of: {expected}"),
                )
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        };

        (
            status_code,
            Json(json!({
                "success": false,
                "error": error_message,
            })),
        )
            .into_response()
    }
}
