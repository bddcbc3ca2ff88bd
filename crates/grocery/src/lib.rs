pub mod aggregation;
pub mod categorization;
pub mod export;
pub mod normalize;
pub mod pantry;
pub mod types;

// Re-export commonly used types
pub use aggregation::{AggregateOptions, AisleCount, GroceryList, GrocerySummary, aggregate};
pub use categorization::{Aisle, CategorizationService, classify_aisle};
pub use export::{ExportError, ExportFormat, render};
pub use normalize::normalize;
pub use pantry::{COMMON_STAPLES, MatchPolicy, Staples, is_in_pantry};
pub use types::{GroceryItem, MealIngredient, PantryEntry, PlannedMeal};
