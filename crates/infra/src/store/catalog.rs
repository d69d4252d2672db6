use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dixm_core::{DomainError, DomainResult, ProductId};
use dixm_products::{Collection, NewWatchProduct, WatchProduct};

/// Authoritative registry of watch products.
///
/// Append-only: products are never updated or removed, and identifiers are
/// never reused.
pub trait ProductCatalog: Send + Sync {
    /// Insert a product and return its newly assigned identifier.
    ///
    /// No duplicate check: identical arguments produce distinct products.
    fn add_product(&self, product: NewWatchProduct) -> DomainResult<ProductId>;

    /// Every product, in insertion order.
    fn all_products(&self) -> DomainResult<Vec<WatchProduct>>;

    fn product_by_id(&self, id: ProductId) -> DomainResult<WatchProduct>;

    /// Products whose collection equals `collection` exactly (case-sensitive),
    /// in insertion order. Empty when nothing matches.
    fn products_by_collection(&self, collection: &str) -> DomainResult<Vec<WatchProduct>>;

    /// Insert `products` unless `collection` was already seeded.
    ///
    /// The marker check and the inserts happen atomically, so concurrent seed
    /// calls for one collection insert a single copy.
    fn seed_collection(
        &self,
        collection: Collection,
        products: Vec<NewWatchProduct>,
    ) -> DomainResult<SeedOutcome>;
}

impl<S> ProductCatalog for Arc<S>
where
    S: ProductCatalog + ?Sized,
{
    fn add_product(&self, product: NewWatchProduct) -> DomainResult<ProductId> {
        (**self).add_product(product)
    }

    fn all_products(&self) -> DomainResult<Vec<WatchProduct>> {
        (**self).all_products()
    }

    fn product_by_id(&self, id: ProductId) -> DomainResult<WatchProduct> {
        (**self).product_by_id(id)
    }

    fn products_by_collection(&self, collection: &str) -> DomainResult<Vec<WatchProduct>> {
        (**self).products_by_collection(collection)
    }

    fn seed_collection(
        &self,
        collection: Collection,
        products: Vec<NewWatchProduct>,
    ) -> DomainResult<SeedOutcome> {
        (**self).seed_collection(collection, products)
    }
}

/// Result of a seed attempt for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub collection: Collection,
    /// Identifiers inserted by this call (empty when already seeded).
    pub inserted: Vec<ProductId>,
    pub already_seeded: bool,
}

/// Catalog behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogPolicy {
    /// Reject products whose collection is not a known `Collection` tag.
    pub strict_collections: bool,
}

#[derive(Debug)]
struct CatalogState {
    // Ids are handed out in increasing order, so key order is insertion order.
    products: BTreeMap<ProductId, WatchProduct>,
    next_id: ProductId,
    seeded: HashSet<Collection>,
}

impl CatalogState {
    fn new() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: ProductId::FIRST,
            seeded: HashSet::new(),
        }
    }

    fn insert(&mut self, product: NewWatchProduct) -> ProductId {
        let id = self.next_id;
        self.next_id = id.next();
        tracing::debug!(product_id = %id, collection = %product.collection, "product added");
        self.products.insert(id, WatchProduct::from_new(id, product));
        id
    }
}

/// In-memory catalog guarded by a single coarse lock.
#[derive(Debug)]
pub struct InMemoryProductCatalog {
    state: RwLock<CatalogState>,
    policy: CatalogPolicy,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::with_policy(CatalogPolicy::default())
    }

    pub fn with_policy(policy: CatalogPolicy) -> Self {
        Self {
            state: RwLock::new(CatalogState::new()),
            policy,
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, CatalogState>> {
        self.state
            .read()
            .map_err(|_| DomainError::unavailable("product catalog lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, CatalogState>> {
        self.state
            .write()
            .map_err(|_| DomainError::unavailable("product catalog lock poisoned"))
    }

    fn check_policy(&self, product: &NewWatchProduct) -> DomainResult<()> {
        if self.policy.strict_collections {
            product.collection.parse::<Collection>()?;
        }
        Ok(())
    }
}

impl Default for InMemoryProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCatalog for InMemoryProductCatalog {
    fn add_product(&self, product: NewWatchProduct) -> DomainResult<ProductId> {
        self.check_policy(&product)?;
        Ok(self.write()?.insert(product))
    }

    fn all_products(&self) -> DomainResult<Vec<WatchProduct>> {
        Ok(self.read()?.products.values().cloned().collect())
    }

    fn product_by_id(&self, id: ProductId) -> DomainResult<WatchProduct> {
        self.read()?
            .products
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    fn products_by_collection(&self, collection: &str) -> DomainResult<Vec<WatchProduct>> {
        Ok(self
            .read()?
            .products
            .values()
            .filter(|p| p.in_collection(collection))
            .cloned()
            .collect())
    }

    fn seed_collection(
        &self,
        collection: Collection,
        products: Vec<NewWatchProduct>,
    ) -> DomainResult<SeedOutcome> {
        for product in &products {
            self.check_policy(product)?;
        }

        let mut state = self.write()?;
        if !state.seeded.insert(collection) {
            return Ok(SeedOutcome {
                collection,
                inserted: Vec::new(),
                already_seeded: true,
            });
        }

        let inserted = products.into_iter().map(|p| state.insert(p)).collect();
        Ok(SeedOutcome {
            collection,
            inserted,
            already_seeded: false,
        })
    }
}
