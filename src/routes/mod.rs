use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use mealmate_grocery::AggregateOptions;

use crate::error::AppError;

mod grocery_list;
mod health;

pub use grocery_list::{
    ExportQuery, GenerateGroceryListRequest, GenerateGroceryListResponse, export_grocery_list,
    generate_grocery_list,
};
pub use health::health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Built once from `config.grocery`
    pub options: Arc<AggregateOptions>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let options = Arc::new(config.grocery.aggregate_options());

        Self { config, options }
    }
}

pub async fn fallback() -> AppError {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health))
        .route("/api/generate-grocery-list", post(generate_grocery_list))
        .route(
            "/api/generate-grocery-list/export",
            post(export_grocery_list),
        )
        .fallback(fallback)
        .with_state(app_state)
}
