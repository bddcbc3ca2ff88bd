use serde::{Deserialize, Serialize};
use serde_json::json;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::aggregation::GroceryList;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Output formats a grocery list can be exported to
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Aisle-grouped checklist
    #[default]
    Text,
    Csv,
    Json,
    /// Short bullet list for messaging apps
    Share,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Text | ExportFormat::Share => "text/plain; charset=utf-8",
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text | ExportFormat::Share => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Download file name: "Week 12 Groceries" -> "week-12-groceries.csv"
    ///
    /// Anything but ASCII letters, digits, `-` and `_` is dropped so the name
    /// is safe inside a `Content-Disposition` header.
    pub fn file_name(&self, title: &str) -> String {
        let stem: String = title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();

        let stem = if stem.is_empty() {
            "grocery-list"
        } else {
            stem.as_str()
        };

        format!("{}.{}", stem, self.extension())
    }
}

/// Render `list` in the requested format
///
/// `exported_at` is only used by the JSON format.
pub fn render(
    list: &GroceryList,
    format: ExportFormat,
    title: &str,
    exported_at: OffsetDateTime,
) -> Result<String, ExportError> {
    let rendered = match format {
        ExportFormat::Text => render_text(list, title),
        ExportFormat::Csv => render_csv(list),
        ExportFormat::Json => render_json(list, title, exported_at)?,
        ExportFormat::Share => render_share(list, title),
    };

    Ok(rendered)
}

fn render_text(list: &GroceryList, title: &str) -> String {
    let mut text = format!("{}\n{}\n\n", title, "=".repeat(title.chars().count()));

    for (aisle, items) in &list.grouped_by_aisle {
        text.push_str(&format!("{aisle}:\n"));
        for item in items {
            text.push_str(&format!("  ○ {} ({})\n", item.name, item.amount));
        }
        text.push('\n');
    }

    text.push_str(&format!("\nTotal: {} items", list.items.len()));
    text
}

fn render_csv(list: &GroceryList) -> String {
    let mut csv = String::from("Name,Quantity,Aisle,Sources\n");

    for item in &list.items {
        let sources = item.sources.join("; ");
        let row = [
            item.name.as_str(),
            item.amount.as_str(),
            item.aisle.as_ref(),
            sources.as_str(),
        ]
        .map(csv_field)
        .join(",");

        csv.push_str(&row);
        csv.push('\n');
    }

    csv
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn render_json(
    list: &GroceryList,
    title: &str,
    exported_at: OffsetDateTime,
) -> Result<String, ExportError> {
    let items: Vec<_> = list
        .items
        .iter()
        .map(|item| {
            json!({
                "name": item.name,
                "quantity": item.amount,
                "aisle": item.aisle,
                "sources": item.sources,
            })
        })
        .collect();

    let document = json!({
        "name": title,
        "exportedAt": exported_at.format(&Rfc3339)?,
        "items": items,
    });

    Ok(serde_json::to_string_pretty(&document)?)
}

fn render_share(list: &GroceryList, title: &str) -> String {
    let mut text = format!("{title}\n\n");

    for item in &list.items {
        text.push_str(&format!("• {} ({})\n", item.name, item.amount));
    }

    text.push_str(&format!("\n{} items total", list.items.len()));
    text
}
