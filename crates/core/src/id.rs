//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are store-assigned, start at 1, and increase by one per
//! insertion. They are never reused.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a watch product in the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

/// Identifier of a stored contact message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

macro_rules! impl_sequential_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// First identifier handed out by an empty store.
            pub const FIRST: Self = Self(1);

            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u64 {
                self.0
            }

            /// The identifier assigned right after this one.
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_sequential_newtype!(ProductId, "ProductId");
impl_sequential_newtype!(MessageId, "MessageId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_advance_by_one() {
        assert_eq!(ProductId::FIRST.get(), 1);
        assert_eq!(ProductId::FIRST.next().get(), 2);
        assert_eq!(MessageId::FIRST.next().next(), MessageId::from_raw(3));
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::from_raw(42));

        let err = "abc".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.starts_with("ProductId")));
        assert!("-1".parse::<MessageId>().is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&ProductId::from_raw(7)).unwrap();
        assert_eq!(json, "7");
    }
}
