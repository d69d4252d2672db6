use serde::{Deserialize, Serialize};

use dixm_core::{Entity, ProductId};

/// A watch product as stored in the catalog.
///
/// Records are immutable once stored; the catalog only ever hands out clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchProduct {
    pub id: ProductId,
    pub name: String,
    pub collection: String,
    pub price: f64,
    pub description: String,
    pub material: String,
    pub available: bool,
}

impl WatchProduct {
    /// Attach a store-assigned identifier to a new product.
    pub fn from_new(id: ProductId, new: NewWatchProduct) -> Self {
        Self {
            id,
            name: new.name,
            collection: new.collection,
            price: new.price,
            description: new.description,
            material: new.material,
            available: new.available,
        }
    }

    /// Exact, case-sensitive collection match.
    pub fn in_collection(&self, collection: &str) -> bool {
        self.collection == collection
    }
}

impl Entity for WatchProduct {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Caller-supplied product fields (everything but the identifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWatchProduct {
    pub name: String,
    pub collection: String,
    pub price: f64,
    pub description: String,
    pub material: String,
    pub available: bool,
}

impl NewWatchProduct {
    pub fn new(
        name: impl Into<String>,
        collection: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        material: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            name: name.into(),
            collection: collection.into(),
            price,
            description: description.into(),
            material: material.into(),
            available,
        }
    }
}
