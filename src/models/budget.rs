//! Budget allocation model
//!
//! Maps each vocabulary category to the fraction of monthly income budgeted
//! for it. Each fraction lives in `[0, 1]`; the sum across categories is
//! deliberately unconstrained and may exceed 1.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BolsoError, BolsoResult};

use super::category::Category;

/// Per-category allocation fractions of monthly income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget {
    allocations: BTreeMap<Category, f64>,
}

impl Budget {
    /// An empty budget with no allocations
    pub fn empty() -> Self {
        Self {
            allocations: BTreeMap::new(),
        }
    }

    /// The seeded default allocations
    pub fn defaults() -> Self {
        let mut budget = Self::empty();
        for (category, fraction) in [
            (Category::Housing, 0.30),
            (Category::Food, 0.15),
            (Category::Transport, 0.10),
            (Category::Health, 0.05),
            (Category::Education, 0.05),
            (Category::Leisure, 0.05),
            (Category::PersonalShopping, 0.05),
            (Category::Subscriptions, 0.05),
            (Category::Taxes, 0.05),
            (Category::Emergencies, 0.05),
            (Category::Investments, 0.10),
        ] {
            budget.allocations.insert(category, fraction);
        }
        budget
    }

    /// The allocation fraction for a category (0 if absent)
    pub fn allocation(&self, category: Category) -> f64 {
        self.allocations.get(&category).copied().unwrap_or(0.0)
    }

    /// Set the allocation fraction for a category
    ///
    /// Fractions outside `[0, 1]` are rejected.
    pub fn set(&mut self, category: Category, fraction: f64) -> BolsoResult<()> {
        if !(0.0..=1.0).contains(&fraction) || !fraction.is_finite() {
            return Err(BolsoError::Validation(format!(
                "Allocation for {} must be between 0 and 1, got {}",
                category, fraction
            )));
        }
        self.allocations.insert(category, fraction);
        Ok(())
    }

    /// Total allocated fraction across all categories
    pub fn total_allocated(&self) -> f64 {
        self.allocations.values().sum()
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_vocabulary() {
        let budget = Budget::defaults();
        assert_eq!(budget.allocation(Category::Housing), 0.30);
        assert_eq!(budget.allocation(Category::Food), 0.15);
        // Other carries no default allocation
        assert_eq!(budget.allocation(Category::Other), 0.0);
    }

    #[test]
    fn test_set_and_get() {
        let mut budget = Budget::empty();
        budget.set(Category::Food, 0.25).unwrap();
        assert_eq!(budget.allocation(Category::Food), 0.25);
        assert_eq!(budget.allocation(Category::Housing), 0.0);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut budget = Budget::empty();
        assert!(budget.set(Category::Food, -0.1).is_err());
        assert!(budget.set(Category::Food, 1.5).is_err());
        assert!(budget.set(Category::Food, f64::NAN).is_err());
        assert!(budget.set(Category::Food, 1.0).is_ok());
        assert!(budget.set(Category::Food, 0.0).is_ok());
    }

    #[test]
    fn test_sum_unconstrained() {
        let mut budget = Budget::empty();
        budget.set(Category::Housing, 0.9).unwrap();
        budget.set(Category::Food, 0.9).unwrap();
        assert!(budget.total_allocated() > 1.0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let budget = Budget::defaults();
        let json = serde_json::to_string(&budget).unwrap();
        assert!(json.contains("\"Housing\":0.3"));

        let back: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, back);
    }
}
