use std::path::Path;

use anyhow::{Context, Result};
use mealmate_grocery::{ExportFormat, render};
use time::OffsetDateTime;

use crate::routes::GenerateGroceryListRequest;

/// Aggregate a request file (or stdin) and render it in `format`
pub fn generate(
    config: &crate::config::Config,
    input: Option<&Path>,
    format: ExportFormat,
    title: &str,
) -> Result<String> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?,
    };

    render_request(config, &raw, format, title)
}

pub fn render_request(
    config: &crate::config::Config,
    raw: &str,
    format: ExportFormat,
    title: &str,
) -> Result<String> {
    let request: GenerateGroceryListRequest =
        serde_json::from_str(raw).context("invalid grocery list request")?;

    let options = config.grocery.aggregate_options();
    let grocery_list = request.grocery_list(&options);

    tracing::info!(
        meals = grocery_list.summary.meals_included,
        total_items = grocery_list.summary.total_items,
        suppressed = grocery_list.summary.items_in_pantry,
        "Grocery list generated"
    );

    Ok(render(
        &grocery_list,
        format,
        title,
        OffsetDateTime::now_utc(),
    )?)
}
