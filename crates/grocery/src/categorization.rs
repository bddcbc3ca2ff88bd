use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Store aisle an ingredient is shelved in
///
/// Ordering follows the label text (plain byte comparison) so that sorted
/// lists and aisle-keyed maps line up with the labels users see.
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
    PartialEq,
    Eq,
    Hash,
)]
pub enum Aisle {
    Produce,
    #[strum(serialize = "Meat & Seafood")]
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    #[strum(serialize = "Dairy & Eggs")]
    #[serde(rename = "Dairy & Eggs")]
    DairyEggs,
    Bakery,
    Frozen,
    #[strum(serialize = "Grains & Pasta")]
    #[serde(rename = "Grains & Pasta")]
    GrainsPasta,
    #[strum(serialize = "Canned & Jarred")]
    #[serde(rename = "Canned & Jarred")]
    CannedJarred,
    #[strum(serialize = "Condiments & Sauces")]
    #[serde(rename = "Condiments & Sauces")]
    CondimentsSauces,
    #[strum(serialize = "Oils & Spices")]
    #[serde(rename = "Oils & Spices")]
    OilsSpices,
    Snacks,
    Beverages,
    Other,
}

impl Ord for Aisle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_ref().cmp(other.as_ref())
    }
}

impl PartialOrd for Aisle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keyword tables checked in priority order, first hit wins.
///
/// Some keywords overlap between aisles ("pepper", "sauce", "oil"); the
/// position in this table is the tie-break.
const AISLE_KEYWORDS: &[(Aisle, &[&str])] = &[
    (
        Aisle::Produce,
        &[
            "lettuce",
            "spinach",
            "kale",
            "arugula",
            "tomato",
            "onion",
            "garlic",
            "pepper",
            "carrot",
            "celery",
            "cucumber",
            "zucchini",
            "squash",
            "broccoli",
            "cauliflower",
            "cabbage",
            "mushroom",
            "avocado",
            "lemon",
            "lime",
            "apple",
            "banana",
            "orange",
            "berry",
            "grape",
            "melon",
            "potato",
            "sweet potato",
            "ginger",
            "herbs",
            "basil",
            "cilantro",
            "parsley",
            "mint",
        ],
    ),
    (
        Aisle::MeatSeafood,
        &[
            "chicken", "beef", "pork", "lamb", "turkey", "salmon", "fish", "shrimp", "crab",
            "lobster", "bacon", "sausage", "ham", "steak", "ground",
        ],
    ),
    (
        Aisle::DairyEggs,
        &[
            "milk",
            "cheese",
            "yogurt",
            "butter",
            "cream",
            "egg",
            "sour cream",
            "cottage",
        ],
    ),
    (
        Aisle::Bakery,
        &[
            "bread",
            "roll",
            "bun",
            "tortilla",
            "pita",
            "bagel",
            "croissant",
            "muffin",
        ],
    ),
    (Aisle::Frozen, &["frozen", "ice cream"]),
    (
        Aisle::GrainsPasta,
        &[
            "rice", "pasta", "noodle", "quinoa", "oat", "cereal", "flour", "couscous", "barley",
        ],
    ),
    (
        Aisle::CannedJarred,
        &[
            "canned",
            "can of",
            "jar",
            "tomato sauce",
            "paste",
            "beans",
            "chickpea",
            "lentil",
            "broth",
            "stock",
        ],
    ),
    (
        Aisle::CondimentsSauces,
        &[
            "sauce",
            "ketchup",
            "mustard",
            "mayo",
            "dressing",
            "vinegar",
            "soy sauce",
            "teriyaki",
            "hot sauce",
            "salsa",
            "honey",
            "syrup",
            "jam",
        ],
    ),
    (
        Aisle::OilsSpices,
        &[
            "oil", "olive", "vegetable", "coconut", "salt", "pepper", "spice", "cumin", "paprika",
            "oregano", "thyme", "rosemary", "cinnamon", "nutmeg", "curry",
        ],
    ),
    (
        Aisle::Snacks,
        &[
            "chip", "cracker", "cookie", "snack", "nut", "almond", "peanut", "granola",
        ],
    ),
    (
        Aisle::Beverages,
        &["juice", "soda", "water", "coffee", "tea", "wine", "beer"],
    ),
];

/// Categorization Service
///
/// Stateless domain service mapping ingredient names to store aisles with the
/// keyword tables above.
pub struct CategorizationService;

impl CategorizationService {
    /// Pick the aisle for an ingredient by keyword substring match
    ///
    /// Only lower-cases the name; punctuation is kept, so "can-of" will not hit
    /// the "can of" keyword. Unknown ingredients land in [`Aisle::Other`].
    pub fn categorize(ingredient_name: &str) -> Aisle {
        let name = ingredient_name.to_lowercase();

        AISLE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
            .map(|(aisle, _)| *aisle)
            .unwrap_or(Aisle::Other)
    }

    /// Keywords that send an ingredient to `aisle`, empty for [`Aisle::Other`]
    pub fn keywords(aisle: Aisle) -> &'static [&'static str] {
        AISLE_KEYWORDS
            .iter()
            .find(|(candidate, _)| *candidate == aisle)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

/// Shorthand for [`CategorizationService::categorize`]
pub fn classify_aisle(ingredient_name: &str) -> Aisle {
    CategorizationService::categorize(ingredient_name)
}
