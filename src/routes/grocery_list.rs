use std::str::FromStr;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::BytesRejection},
    http::header,
    response::{IntoResponse, Response},
};
use mealmate_grocery::{
    AggregateOptions, ExportFormat, GroceryList, PantryEntry, PlannedMeal, aggregate, render,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::routes::AppState;

pub const DEFAULT_EXPORT_TITLE: &str = "Grocery List";

/// Body of POST /api/generate-grocery-list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateGroceryListRequest {
    #[serde(default)]
    pub household_id: Option<String>,
    pub meals: Vec<PlannedMeal>,
    #[serde(default)]
    pub pantry_items: Option<Vec<PantryEntry>>,
    /// Falls back to the configured default when omitted
    #[serde(default)]
    pub exclude_staples: Option<bool>,
}

impl GenerateGroceryListRequest {
    /// Parse a request body whatever its `Content-Type` says
    pub fn from_body(body: Result<Bytes, BytesRejection>) -> Result<Self, AppError> {
        Ok(serde_json::from_slice(&body?)?)
    }

    pub fn grocery_list(&self, defaults: &AggregateOptions) -> GroceryList {
        let pantry = self.pantry_items.as_deref().unwrap_or_default();

        match self.exclude_staples {
            Some(exclude_staples) if exclude_staples != defaults.exclude_staples => {
                let options = defaults.clone().exclude_staples(exclude_staples);
                aggregate(&self.meals, pantry, &options)
            }
            _ => aggregate(&self.meals, pantry, defaults),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateGroceryListResponse {
    pub success: bool,
    pub grocery_list: GroceryList,
}

/// POST /api/generate-grocery-list
///
/// Aggregates the planned meals into an aisle-grouped shopping list, leaving
/// out what the pantry or the staples list already covers.
#[tracing::instrument(skip_all, fields(household_id))]
pub async fn generate_grocery_list(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GenerateGroceryListResponse>, AppError> {
    let request = GenerateGroceryListRequest::from_body(body)?;
    record_household(&request);

    let grocery_list = request.grocery_list(&state.options);

    tracing::info!(
        meals = grocery_list.summary.meals_included,
        total_items = grocery_list.summary.total_items,
        suppressed = grocery_list.summary.items_in_pantry,
        "Grocery list generated"
    );

    Ok(Json(GenerateGroceryListResponse {
        success: true,
        grocery_list,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
    pub title: Option<String>,
}

/// POST /api/generate-grocery-list/export?format=csv&title=Week%2012
///
/// Same body as the generate endpoint, answered with a downloadable file.
#[tracing::instrument(skip_all, fields(household_id, format))]
pub async fn export_grocery_list(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let format = match query.format.as_deref() {
        None => ExportFormat::default(),
        Some(value) => ExportFormat::from_str(value)
            .map_err(|_| AppError::UnknownFormat(value.to_string()))?,
    };
    let format_label: &str = format.as_ref();
    tracing::Span::current().record("format", format_label);

    let request = GenerateGroceryListRequest::from_body(body)?;
    record_household(&request);

    let title = query
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_EXPORT_TITLE);

    let grocery_list = request.grocery_list(&state.options);
    let body = render(&grocery_list, format, title, OffsetDateTime::now_utc())?;

    tracing::info!(
        total_items = grocery_list.summary.total_items,
        "Grocery list exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.mime_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.file_name(title)),
            ),
        ],
        body,
    )
        .into_response())
}

fn record_household(request: &GenerateGroceryListRequest) {
    if let Some(household_id) = &request.household_id {
        tracing::Span::current().record("household_id", household_id.as_str());
    }
}
