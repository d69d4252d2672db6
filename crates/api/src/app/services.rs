use std::sync::Arc;

use chrono::Utc;

use dixm_contact::{ContactMessage, NewContactMessage};
use dixm_core::{DomainResult, MessageId, ProductId};
use dixm_infra::{
    CatalogPolicy, ContactLog, InMemoryContactLog, InMemoryProductCatalog, ProductCatalog,
    SeedLoader, SeedOutcome,
};
use dixm_products::{Collection, NewWatchProduct, WatchProduct};

/// Store handles shared by every request.
///
/// Created once at process start; the stores live as long as this value.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<dyn ProductCatalog>,
    contacts: Arc<dyn ContactLog>,
    seeder: SeedLoader<Arc<dyn ProductCatalog>>,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn ProductCatalog>, contacts: Arc<dyn ContactLog>) -> Self {
        Self {
            seeder: SeedLoader::new(catalog.clone()),
            catalog,
            contacts,
        }
    }

    /// Empty in-memory stores (dev/test and the default deployment).
    pub fn in_memory(policy: CatalogPolicy) -> Self {
        Self::new(
            Arc::new(InMemoryProductCatalog::with_policy(policy)),
            Arc::new(InMemoryContactLog::new()),
        )
    }

    pub fn add_product(&self, product: NewWatchProduct) -> DomainResult<ProductId> {
        self.catalog.add_product(product)
    }

    pub fn products_list(&self) -> DomainResult<Vec<WatchProduct>> {
        self.catalog.all_products()
    }

    pub fn products_get(&self, id: ProductId) -> DomainResult<WatchProduct> {
        self.catalog.product_by_id(id)
    }

    pub fn products_by_collection(&self, collection: &str) -> DomainResult<Vec<WatchProduct>> {
        self.catalog.products_by_collection(collection)
    }

    pub fn seed(&self, collection: Collection) -> DomainResult<SeedOutcome> {
        self.seeder.seed(collection)
    }

    pub fn submit_contact(&self, message: NewContactMessage) -> DomainResult<MessageId> {
        self.contacts.submit(message, Utc::now())
    }

    pub fn contacts_list(&self) -> DomainResult<Vec<ContactMessage>> {
        self.contacts.all_messages()
    }
}

/// Seed every collection in parallel, logging and swallowing failures.
///
/// Mirrors the site's startup behaviour: seeding is best-effort and never
/// prevents the service from coming up.
pub async fn seed_all_best_effort(services: Arc<AppServices>) {
    let handles: Vec<_> = Collection::ALL
        .into_iter()
        .map(|collection| {
            let services = services.clone();
            let handle = tokio::task::spawn_blocking(move || services.seed(collection));
            (collection, handle)
        })
        .collect();

    for (collection, handle) in handles {
        match handle.await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => tracing::warn!(%collection, "startup seed failed: {e}"),
            Err(e) => tracing::warn!(%collection, "startup seed task failed: {e}"),
        }
    }
}
