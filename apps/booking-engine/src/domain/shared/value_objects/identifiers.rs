//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_numeric_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an identifier from a raw numeric value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the raw numeric value.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// True if this identifier was assigned by the store.
            ///
            /// Store-assigned identifiers are strictly positive; zero or
            /// negative means the entity has not been persisted yet.
            #[must_use]
            pub const fn is_assigned(&self) -> bool {
                self.0 > 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

define_numeric_id!(OrderId, "Unique identifier for a reservation order.");
define_numeric_id!(VenueId, "Unique identifier for a bookable venue.");

/// Identifier of a user, as issued by the upstream account system.
///
/// Opaque to this component; it is only compared for ownership checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user identifier from a string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the identifier is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_new_and_display() {
        let id = OrderId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn order_id_assignment() {
        assert!(OrderId::new(1).is_assigned());
        assert!(!OrderId::new(0).is_assigned());
        assert!(!OrderId::new(-5).is_assigned());
        assert!(!OrderId::default().is_assigned());
    }

    #[test]
    fn order_id_equality() {
        assert_eq!(OrderId::new(7), OrderId::new(7));
        assert_ne!(OrderId::new(7), OrderId::new(8));
    }

    #[test]
    fn venue_id_from_i64() {
        let id: VenueId = 3.into();
        assert_eq!(id.value(), 3);
    }

    #[test]
    fn user_id_blank_detection() {
        assert!(UserId::new("").is_blank());
        assert!(UserId::new("   ").is_blank());
        assert!(!UserId::new("user1").is_blank());
    }

    #[test]
    fn user_id_display_and_as_ref() {
        let id = UserId::new("user1");
        assert_eq!(format!("{id}"), "user1");
        assert_eq!(id.as_ref(), "user1");
    }

    #[test]
    fn serde_roundtrip() {
        let id = OrderId::new(12);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "12");
        let parsed: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);

        let user: UserId = serde_json::from_str("\"user1\"").unwrap();
        assert_eq!(user.as_str(), "user1");
    }

    #[test]
    fn hash_works_for_collections() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(OrderId::new(1));
        set.insert(OrderId::new(2));
        set.insert(OrderId::new(1)); // duplicate

        assert_eq!(set.len(), 2);
    }
}
