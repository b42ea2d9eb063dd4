//! Classification rule model
//!
//! A rule maps a comma-separated keyword list to a target category. Rules
//! are evaluated in ascending priority order (lower first) by the rule
//! engine; disabled rules are skipped entirely.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RuleId;

/// A keyword-to-category classification rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier
    pub id: RuleId,

    /// Comma-separated, case-insensitive keyword substrings
    pub keywords: String,

    /// Target category name assigned on match
    pub category: String,

    /// Whether the rule participates in classification
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Evaluation priority; lower values are evaluated first
    #[serde(default)]
    pub priority: i32,
}

fn default_enabled() -> bool {
    true
}

impl Rule {
    /// Create a new enabled rule
    pub fn new(keywords: impl Into<String>, category: impl Into<String>, priority: i32) -> Self {
        Self {
            id: RuleId::new(),
            keywords: keywords.into(),
            category: category.into(),
            enabled: true,
            priority,
        }
    }

    /// The cleaned keyword tokens: comma-split, trimmed, lower-cased,
    /// empty tokens discarded
    pub fn tokens(&self) -> Vec<String> {
        self.keywords
            .split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect()
    }

    /// Test whether any keyword token is contained in the given haystack
    ///
    /// The haystack is expected to be lower-cased by the caller.
    pub fn matches(&self, haystack: &str) -> bool {
        self.tokens().iter().any(|k| haystack.contains(k.as_str()))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} -> {} (priority {})",
            if self.enabled { "on" } else { "off" },
            self.keywords,
            self.category,
            self.priority
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_cleaned() {
        let rule = Rule::new(" Uber, iFood ,, TAXI ", "Transport", 0);
        assert_eq!(rule.tokens(), vec!["uber", "ifood", "taxi"]);
    }

    #[test]
    fn test_matches_substring() {
        let rule = Rule::new("uber,99", "Transport", 0);
        assert!(rule.matches("uber trip to airport"));
        assert!(rule.matches("99 pop ride"));
        assert!(!rule.matches("grocery store"));
    }

    #[test]
    fn test_empty_keywords_never_match() {
        let rule = Rule::new(" , ,", "Other", 0);
        assert!(rule.tokens().is_empty());
        assert!(!rule.matches("anything"));
    }

    #[test]
    fn test_enabled_default_on_deserialize() {
        let json = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","keywords":"uber","category":"Transport"}"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert!(rule.enabled);
        assert_eq!(rule.priority, 0);
    }
}
