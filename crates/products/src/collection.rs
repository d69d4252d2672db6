//! Collection tags.
//!
//! At the data layer a collection is an open string tag. `Collection` names the
//! tags the brand currently ships and is only enforced when a catalog runs in
//! strict mode.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use dixm_core::DomainError;

/// Known collection tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Heritage,
    Precision,
    #[serde(rename = "Avant-Garde")]
    AvantGarde,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Heritage,
        Collection::Precision,
        Collection::AvantGarde,
    ];

    /// Exact tag stored in `WatchProduct::collection`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Collection::Heritage => "Heritage",
            Collection::Precision => "Precision",
            Collection::AvantGarde => "Avant-Garde",
        }
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = DomainError;

    /// Case-sensitive, like the catalog's collection filter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown collection '{s}' (expected one of: Heritage, Precision, Avant-Garde)"
                ))
            })
    }
}
