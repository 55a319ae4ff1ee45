//! `salonerp-engine` — inventory consumption & reconciliation engine.
//!
//! Translates rendered services into stock deductions: per-service usage
//! calculation, additive consolidation across a checkout, a read-only impact
//! preview, best-effort application with per-product failure reporting, and
//! the standalone low-stock sweep.

pub mod engine;
pub mod types;

pub use engine::ConsumptionEngine;
pub use types::{DeductionReport, ImpactSummary, LowStockAlert, UsageDeduction};
