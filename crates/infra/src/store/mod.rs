//! In-memory, append-only stores backing the service.

pub mod catalog;
pub mod contact_log;

pub use catalog::{CatalogPolicy, InMemoryProductCatalog, ProductCatalog, SeedOutcome};
pub use contact_log::{ContactLog, InMemoryContactLog};
