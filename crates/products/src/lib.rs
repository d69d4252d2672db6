//! Products domain module: watch products, collection tags, seed content.
//!
//! This crate contains the catalog's data types only, as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod collection;
pub mod product;
pub mod seed;

pub use collection::Collection;
pub use product::{NewWatchProduct, WatchProduct};
pub use seed::seed_products;
