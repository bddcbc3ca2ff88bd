use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::normalize::normalize;
use crate::types::PantryEntry;

/// Staples most households keep on hand
pub const COMMON_STAPLES: &[&str] = &[
    "salt",
    "pepper",
    "water",
    "oil",
    "olive oil",
    "vegetable oil",
    "sugar",
    "flour",
    "baking soda",
    "baking powder",
];

/// How an ingredient is compared against pantry and staple names
#[derive(
    EnumString,
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
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Plain substring containment on normalized names. Loose: "egg" hits
    /// "eggplant" and "oil" hits "boiled ham".
    #[default]
    Substring,
    /// Containment on whole words only.
    Word,
}

impl MatchPolicy {
    /// Whether `needle` occurs inside `haystack`, both already normalized
    ///
    /// Under `Substring` the empty string is contained in everything. `Word`
    /// never matches when either side has no words.
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            MatchPolicy::Substring => haystack.contains(needle),
            MatchPolicy::Word => {
                if haystack.is_empty() || needle.is_empty() {
                    return false;
                }

                let haystack: Vec<&str> = haystack.split(' ').collect();
                let needle: Vec<&str> = needle.split(' ').collect();

                haystack
                    .windows(needle.len())
                    .any(|window| window == needle.as_slice())
            }
        }
    }
}

/// Check whether the pantry already covers an ingredient
///
/// Matches in both directions: "eggs" in the pantry covers "large eggs", and
/// "chicken breast" in the pantry covers a recipe asking for "chicken".
/// With [`MatchPolicy::Substring`] a nameless pantry entry covers every
/// ingredient, and a nameless ingredient is covered by any pantry entry.
pub fn is_in_pantry(ingredient_name: &str, pantry: &[PantryEntry], policy: MatchPolicy) -> bool {
    let normalized = normalize(ingredient_name);

    pantry.iter().any(|item| {
        let pantry_normalized = normalize(&item.name);

        policy.contains(&normalized, &pantry_normalized)
            || policy.contains(&pantry_normalized, &normalized)
    })
}

/// Staples list used to suppress ingredients nobody needs to buy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staples(Vec<String>);

impl Default for Staples {
    fn default() -> Self {
        Self(COMMON_STAPLES.iter().map(|s| s.to_string()).collect())
    }
}

impl Staples {
    /// Default staples plus `extra`, normalized and without duplicates
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut staples = Self::default();
        for name in extra {
            let name = normalize(name.as_ref());
            if !name.is_empty() && !staples.0.contains(&name) {
                staples.0.push(name);
            }
        }
        staples
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether the ingredient name contains any staple
    pub fn matches(&self, ingredient_name: &str, policy: MatchPolicy) -> bool {
        let normalized = normalize(ingredient_name);

        self.0
            .iter()
            .any(|staple| policy.contains(&normalized, staple))
    }
}
