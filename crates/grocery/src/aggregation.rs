use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::categorization::{Aisle, CategorizationService};
use crate::normalize::normalize;
use crate::pantry::{MatchPolicy, Staples, is_in_pantry};
use crate::types::{GroceryItem, PantryEntry, PlannedMeal};

/// Knobs for a single aggregation run
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Suppress ingredients that match the staples list
    pub exclude_staples: bool,
    pub match_policy: MatchPolicy,
    pub staples: Staples,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            exclude_staples: true,
            match_policy: MatchPolicy::default(),
            staples: Staples::default(),
        }
    }
}

impl AggregateOptions {
    pub fn exclude_staples(mut self, exclude_staples: bool) -> Self {
        self.exclude_staples = exclude_staples;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AisleCount {
    pub aisle: Aisle,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrocerySummary {
    pub total_items: usize,
    pub by_aisle: Vec<AisleCount>,
    pub meals_included: usize,
    /// Ingredients suppressed by the pantry or the staples list
    pub items_in_pantry: usize,
    pub distinct_ingredients: usize,
}

/// Deduplicated shopping list for a set of planned meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryList {
    /// Needed items, sorted by aisle label
    pub items: Vec<GroceryItem>,
    pub grouped_by_aisle: BTreeMap<Aisle, Vec<GroceryItem>>,
    pub summary: GrocerySummary,
}

/// Build the grocery list for `meals`
///
/// Ingredients are merged on their normalized name. The first line seen for a
/// name decides its display name, aisle and whether it is needed; later lines
/// only add their meal to `sources` and their amount to `amount`. Amounts are
/// concatenated, not summed: "1 lb" and "2 lbs" become "1 lb, 2 lbs".
pub fn aggregate(
    meals: &[PlannedMeal],
    pantry: &[PantryEntry],
    options: &AggregateOptions,
) -> GroceryList {
    let mut seen: Vec<GroceryItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for meal in meals {
        for ingredient in &meal.ingredients {
            let key = normalize(&ingredient.name);

            if let Some(&position) = index.get(&key) {
                let existing = &mut seen[position];

                if !existing.sources.contains(&meal.name) {
                    existing.sources.push(meal.name.to_owned());
                }

                if !existing.amount.contains(&ingredient.amount) {
                    existing.amount = format!("{}, {}", existing.amount, ingredient.amount);
                }

                continue;
            }

            let in_pantry = is_in_pantry(&ingredient.name, pantry, options.match_policy);
            let is_staple = options.exclude_staples
                && options
                    .staples
                    .matches(&ingredient.name, options.match_policy);

            index.insert(key, seen.len());
            seen.push(GroceryItem {
                name: ingredient.name.to_owned(),
                amount: ingredient.amount.to_owned(),
                aisle: CategorizationService::categorize(&ingredient.name),
                needed: !in_pantry && !is_staple,
                sources: vec![meal.name.to_owned()],
            });
        }
    }

    let distinct_ingredients = seen.len();

    let mut items: Vec<GroceryItem> = seen.into_iter().filter(|item| item.needed).collect();
    // stable: items keep first-seen order within an aisle
    items.sort_by(|a, b| a.aisle.as_ref().cmp(b.aisle.as_ref()));

    let mut grouped_by_aisle: BTreeMap<Aisle, Vec<GroceryItem>> = BTreeMap::new();
    for item in &items {
        grouped_by_aisle
            .entry(item.aisle)
            .or_default()
            .push(item.clone());
    }

    let by_aisle = grouped_by_aisle
        .iter()
        .map(|(aisle, items)| AisleCount {
            aisle: *aisle,
            count: items.len(),
        })
        .collect();

    let summary = GrocerySummary {
        total_items: items.len(),
        by_aisle,
        meals_included: meals.len(),
        items_in_pantry: distinct_ingredients - items.len(),
        distinct_ingredients,
    };

    GroceryList {
        items,
        grouped_by_aisle,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MealIngredient;

    fn meal(name: &str, ingredients: &[(&str, &str)]) -> PlannedMeal {
        PlannedMeal::new(
            name,
            ingredients
                .iter()
                .map(|(n, a)| MealIngredient::new(*n, *a))
                .collect(),
        )
    }

    #[test]
    fn test_merges_across_meals() {
        let meals = vec![
            meal("Tacos", &[("Ground Beef", "1 lb")]),
            meal("Chili", &[("ground beef", "2 lbs")]),
        ];

        let list = aggregate(&meals, &[], &AggregateOptions::default());

        assert_eq!(list.items.len(), 1);
        let item = &list.items[0];
        assert_eq!(item.name, "Ground Beef");
        assert_eq!(item.aisle, Aisle::MeatSeafood);
        assert_eq!(item.sources, vec!["Tacos", "Chili"]);
        assert_eq!(item.amount, "1 lb, 2 lbs");
        assert!(item.needed);
    }

    #[test]
    fn test_same_meal_twice_is_one_source() {
        let meals = vec![meal("Salad", &[("Lettuce", "1 head"), ("lettuce!", "2 leaves")])];

        let list = aggregate(&meals, &[], &AggregateOptions::default());

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].sources, vec!["Salad"]);
        assert_eq!(list.items[0].amount, "1 head, 2 leaves");
    }

    #[test]
    fn test_repeated_amount_not_appended() {
        let meals = vec![
            meal("Omelette", &[("Cheese", "1 cup")]),
            meal("Nachos", &[("cheese", "1 cup")]),
            meal("Pizza", &[("CHEESE", "cup")]),
        ];

        let list = aggregate(&meals, &[], &AggregateOptions::default());

        assert_eq!(list.items[0].amount, "1 cup");
        assert_eq!(list.items[0].sources.len(), 3);
    }

    #[test]
    fn test_staples_suppressed_only_when_excluded() {
        let meals = vec![meal("Soup", &[("Salt", "1 tsp"), ("Carrots", "2")])];

        let list = aggregate(&meals, &[], &AggregateOptions::default());
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].name, "Carrots");
        assert_eq!(list.summary.items_in_pantry, 1);

        let list = aggregate(&meals, &[], &AggregateOptions::default().exclude_staples(false));
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.summary.items_in_pantry, 0);
    }

    #[test]
    fn test_pantry_suppresses_regardless_of_staples_flag() {
        let meals = vec![meal("Breakfast", &[("Eggs", "2")])];
        let pantry = vec![PantryEntry::named("eggs")];

        for exclude in [true, false] {
            let options = AggregateOptions::default().exclude_staples(exclude);
            let list = aggregate(&meals, &pantry, &options);
            assert!(list.items.is_empty());
            assert_eq!(list.summary.items_in_pantry, 1);
        }
    }

    #[test]
    fn test_merged_lines_share_first_verdict() {
        let meals = vec![
            meal("A", &[("Olive Oil", "2 tbsp")]),
            meal("B", &[("OLIVE OIL", "1 tbsp")]),
        ];

        let list = aggregate(&meals, &[], &AggregateOptions::default());
        assert!(list.items.is_empty());
        assert_eq!(list.summary.distinct_ingredients, 1);
        assert_eq!(list.summary.items_in_pantry, 1);
    }

    #[test]
    fn test_hyphen_yields_distinct_key() {
        // "olive-oil" normalizes to "oliveoil", not "olive oil"
        let meals = vec![
            meal("A", &[("Olive Oil", "2 tbsp")]),
            meal("B", &[("olive-oil", "1 tbsp")]),
        ];

        let list = aggregate(&meals, &[], &AggregateOptions::default().exclude_staples(false));
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.summary.distinct_ingredients, 2);
    }

    #[test]
    fn test_sorted_and_grouped_by_aisle() {
        let meals = vec![
            meal(
                "Dinner",
                &[
                    ("Spinach", "1 bag"),
                    ("Chicken Thighs", "2 lbs"),
                    ("Rice", "1 cup"),
                    ("Sourdough Bread", "1 loaf"),
                    ("Basil", "1 bunch"),
                    ("Xanthan Gum", "1 tsp"),
                ],
            ),
        ];

        let list = aggregate(&meals, &[], &AggregateOptions::default());

        let aisles: Vec<&str> = list.items.iter().map(|i| i.aisle.as_ref()).collect();
        assert_eq!(
            aisles,
            vec![
                "Bakery",
                "Grains & Pasta",
                "Meat & Seafood",
                "Other",
                "Produce",
                "Produce"
            ]
        );

        let produce = &list.grouped_by_aisle[&Aisle::Produce];
        assert_eq!(produce[0].name, "Spinach");
        assert_eq!(produce[1].name, "Basil");

        let keys: Vec<Aisle> = list.grouped_by_aisle.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                Aisle::Bakery,
                Aisle::GrainsPasta,
                Aisle::MeatSeafood,
                Aisle::Other,
                Aisle::Produce
            ]
        );
        assert_eq!(list.summary.by_aisle.len(), 5);
        assert_eq!(
            list.summary.by_aisle[4],
            AisleCount {
                aisle: Aisle::Produce,
                count: 2
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let list = aggregate(&[], &[], &AggregateOptions::default());

        assert!(list.items.is_empty());
        assert!(list.grouped_by_aisle.is_empty());
        assert_eq!(list.summary.total_items, 0);
        assert_eq!(list.summary.meals_included, 0);
        assert_eq!(list.summary.items_in_pantry, 0);
    }

    #[test]
    fn test_summary_counts() {
        let meals = vec![
            meal("Tacos", &[("Ground Beef", "1 lb"), ("Salt", "pinch"), ("Tortillas", "8")]),
            meal("Chili", &[("ground beef", "2 lbs"), ("Kidney Beans", "1 can")]),
            meal("Snack", &[]),
        ];
        let pantry = vec![PantryEntry::named("tortillas")];

        let list = aggregate(&meals, &pantry, &AggregateOptions::default());

        assert_eq!(list.summary.total_items, 2);
        assert_eq!(list.summary.meals_included, 3);
        assert_eq!(list.summary.items_in_pantry, 2);
        assert_eq!(list.summary.distinct_ingredients, 4);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let meals = vec![meal("Tacos", &[("Ground Beef", "1 lb")])];
        let list = aggregate(&meals, &[], &AggregateOptions::default());

        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["summary"]["totalItems"], 1);
        assert_eq!(value["summary"]["mealsIncluded"], 1);
        assert_eq!(value["summary"]["itemsInPantry"], 0);
        assert_eq!(value["summary"]["byAisle"][0]["aisle"], "Meat & Seafood");
        assert_eq!(value["groupedByAisle"]["Meat & Seafood"][0]["name"], "Ground Beef");
    }
}
