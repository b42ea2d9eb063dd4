//! The fixed budget category vocabulary
//!
//! Budgets and the budget report are scoped to this closed set. A
//! transaction's own `category` field stays a free string so that raw import
//! data survives verbatim; anything outside the vocabulary is bucketed under
//! [`Category::Other`] when aggregated spend meets the budget table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A budget category from the fixed vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Housing,
    Food,
    Transport,
    Health,
    Education,
    Leisure,
    #[serde(rename = "Personal Shopping")]
    PersonalShopping,
    #[serde(rename = "Subscriptions & Services")]
    Subscriptions,
    #[serde(rename = "Taxes/Fees")]
    Taxes,
    Emergencies,
    #[serde(rename = "Investments/Reserve")]
    Investments,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 12] = [
        Category::Housing,
        Category::Food,
        Category::Transport,
        Category::Health,
        Category::Education,
        Category::Leisure,
        Category::PersonalShopping,
        Category::Subscriptions,
        Category::Taxes,
        Category::Emergencies,
        Category::Investments,
        Category::Other,
    ];

    /// The display name of the category
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Leisure => "Leisure",
            Category::PersonalShopping => "Personal Shopping",
            Category::Subscriptions => "Subscriptions & Services",
            Category::Taxes => "Taxes/Fees",
            Category::Emergencies => "Emergencies",
            Category::Investments => "Investments/Reserve",
            Category::Other => "Other",
        }
    }

    /// Look up a category by name, case-insensitively
    ///
    /// Returns `None` for anything outside the vocabulary.
    pub fn from_name(name: &str) -> Option<Category> {
        let name = name.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Resolve an arbitrary category string to the vocabulary
    ///
    /// Unknown names fall into the `Other` catch-all bucket. This is the
    /// mapping the budget evaluator uses for aggregated spend.
    pub fn from_name_or_other(name: &str) -> Category {
        Category::from_name(name).unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
