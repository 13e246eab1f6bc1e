//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around the database surrogate keys prevent accidental
//! mixing of different identifier types (a `ProductId` can never be passed
//! where a `SaleId` is expected). The wrappers are transparent for serde and
//! sqlx, so they bind and decode exactly like the underlying `i64`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a raw key value
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw key value
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(UserId);
define_id!(CategoryId);
define_id!(ProductId);
define_id!(InventoryId);
define_id!(SaleId);
define_id!(SaleItemId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_value() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }

    #[test]
    fn test_from_str_round_trip() {
        let id: SaleId = "17".parse().unwrap();
        assert_eq!(id, SaleId::new(17));
        assert!("not-a-number".parse::<SaleId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id = UserId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");

        let back: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
