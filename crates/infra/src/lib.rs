//! Infrastructure layer: stores and seeding.

pub mod seed;
pub mod store;

pub use seed::SeedLoader;
pub use store::{
    CatalogPolicy, ContactLog, InMemoryContactLog, InMemoryProductCatalog, ProductCatalog,
    SeedOutcome,
};
