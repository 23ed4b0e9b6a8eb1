//! Strongly-typed ID wrappers for budget entities
//!
//! YNAB identifies accounts and scheduled transactions by UUID. Wrapping them
//! keeps an account id from being passed where a transaction id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
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

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
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

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(ScheduledTransactionId, "sch-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = AccountId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("acc-"));
        assert_eq!(display.len(), 12); // "acc-" + 8 chars
    }

    #[test]
    fn test_ids_are_ordered_by_uuid() {
        let low = ScheduledTransactionId::parse("00000000-0000-0000-0000-000000000001").unwrap();
        let high = ScheduledTransactionId::parse("00000000-0000-0000-0000-000000000002").unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_id_deserializes_from_plain_uuid_string() {
        let json = "\"550e8400-e29b-41d4-a716-446655440000\"";
        let id: AccountId = serde_json::from_str(json).unwrap();
        assert_eq!(
            id.as_uuid().to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_id_from_str_with_prefix() {
        let id: AccountId = "acc-550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(
            id.as_uuid().to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }
}
