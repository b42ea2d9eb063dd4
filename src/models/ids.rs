//! Strongly-typed ID wrappers for entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. Listings print a short prefixed form
//! (`txn-` plus the first 8 hex chars); `matches` resolves that short form
//! back, so any ID shown to the user can be fed to a delete command.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Check whether a user-supplied selector refers to this ID
            ///
            /// Accepts the full UUID or any hex prefix of it (the display
            /// form is one such prefix), with or without the display
            /// prefix. Prefix selectors can be ambiguous across a
            /// collection; resolving that is the store's concern.
            pub fn matches(&self, selector: &str) -> bool {
                let bare = selector.strip_prefix($display_prefix).unwrap_or(selector);
                if bare.is_empty() {
                    return false;
                }
                self.0.to_string().starts_with(&bare.to_ascii_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(RuleId, "rul-");
