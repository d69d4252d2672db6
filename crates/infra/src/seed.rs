//! Seed loader: populates the catalog with the fixed demonstration products.
//!
//! Each routine is idempotent. The first call for a collection inserts its
//! fixed list; later calls (including concurrent ones) are no-ops that report
//! `already_seeded`.

use dixm_core::DomainResult;
use dixm_products::{Collection, seed_products};

use crate::store::{ProductCatalog, SeedOutcome};

#[derive(Debug, Clone)]
pub struct SeedLoader<C> {
    catalog: C,
}

impl<C> SeedLoader<C>
where
    C: ProductCatalog,
{
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn seed_heritage(&self) -> DomainResult<SeedOutcome> {
        self.seed(Collection::Heritage)
    }

    pub fn seed_precision(&self) -> DomainResult<SeedOutcome> {
        self.seed(Collection::Precision)
    }

    pub fn seed_avant_garde(&self) -> DomainResult<SeedOutcome> {
        self.seed(Collection::AvantGarde)
    }

    pub fn seed(&self, collection: Collection) -> DomainResult<SeedOutcome> {
        let outcome = self
            .catalog
            .seed_collection(collection, seed_products(collection))?;

        if outcome.already_seeded {
            tracing::info!(%collection, "seed skipped: collection already seeded");
        } else {
            tracing::info!(%collection, inserted = outcome.inserted.len(), "collection seeded");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::store::InMemoryProductCatalog;

    fn loader() -> (Arc<InMemoryProductCatalog>, SeedLoader<Arc<InMemoryProductCatalog>>) {
        let catalog = Arc::new(InMemoryProductCatalog::new());
        let loader = SeedLoader::new(catalog.clone());
        (catalog, loader)
    }

    #[test]
    fn heritage_seed_yields_exactly_the_fixed_list() {
        let (catalog, loader) = loader();
        loader.seed_heritage().unwrap();

        let heritage = catalog.products_by_collection("Heritage").unwrap();
        let summary: Vec<_> = heritage
            .iter()
            .map(|p| (p.name.as_str(), p.price, p.material.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Heritage Masterpiece", 48500.0, "18K Rose Gold"),
                ("Heritage Classique", 32000.0, "18K Yellow Gold"),
                ("Heritage Moonphase", 41500.0, "Platinum 950"),
            ]
        );
        assert_eq!(catalog.all_products().unwrap().len(), 3);
    }

    #[test]
    fn repeated_seeding_does_not_duplicate() {
        let (catalog, loader) = loader();

        let first = loader.seed_precision().unwrap();
        let second = loader.seed_precision().unwrap();

        assert!(!first.already_seeded);
        assert_eq!(first.inserted.len(), 3);
        assert!(second.already_seeded);
        assert!(second.inserted.is_empty());
        assert_eq!(catalog.products_by_collection("Precision").unwrap().len(), 3);
    }

    #[test]
    fn seeding_does_not_block_manual_duplicates() {
        let (catalog, loader) = loader();
        loader.seed_avant_garde().unwrap();

        let copy = catalog.products_by_collection("Avant-Garde").unwrap()[0].clone();
        catalog
            .add_product(dixm_products::NewWatchProduct::new(
                copy.name,
                copy.collection,
                copy.price,
                copy.description,
                copy.material,
                copy.available,
            ))
            .unwrap();

        assert_eq!(catalog.products_by_collection("Avant-Garde").unwrap().len(), 4);
        assert!(loader.seed_avant_garde().unwrap().already_seeded);
    }

    #[test]
    fn parallel_seeding_of_all_collections() {
        let (catalog, loader) = loader();

        std::thread::scope(|s| {
            for _ in 0..3 {
                let loader = &loader;
                s.spawn(move || {
                    loader.seed_heritage().unwrap();
                    loader.seed_precision().unwrap();
                    loader.seed_avant_garde().unwrap();
                });
            }
        });

        let all = catalog.all_products().unwrap();
        assert_eq!(all.len(), 9);
        for collection in Collection::ALL {
            assert_eq!(
                catalog.products_by_collection(collection.as_str()).unwrap().len(),
                3
            );
        }
    }

    #[test]
    fn seeding_works_under_strict_policy() {
        let catalog = Arc::new(InMemoryProductCatalog::with_policy(crate::store::CatalogPolicy {
            strict_collections: true,
        }));
        let loader = SeedLoader::new(catalog.clone());

        for collection in Collection::ALL {
            loader.seed(collection).unwrap();
        }
        assert_eq!(catalog.all_products().unwrap().len(), 9);
    }
}
