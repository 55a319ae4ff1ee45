//! `salonerp-infra` — storage ports and adapters for the consumption engine.
//!
//! The engine is generic over these ports; the in-memory adapters back tests
//! and dev deployments and can be swapped for persistent ones later.

pub mod catalog_store;
pub mod stock_store;

pub use catalog_store::{CatalogReader, InMemoryCatalog};
pub use stock_store::{InMemoryStockStore, StockStore};
