//! Inventory domain module.
//!
//! This crate contains business rules for physical product stock,
//! implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod alert;
pub mod stock;

pub use alert::AlertLevel;
pub use stock::{StockRecord, UnitKind};
