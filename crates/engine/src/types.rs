//! Ephemeral engine outputs: created per request, never persisted.

use serde::{Deserialize, Serialize};

use salonerp_core::ProductId;
use salonerp_inventory::AlertLevel;

/// One required stock deduction, produced by the usage calculator.
///
/// `amount` is in containers for piece-kind products and fine units
/// otherwise; `unit` is the policy's unit-of-measure label for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageDeduction {
    pub product_id: ProductId,
    pub amount: f64,
    pub unit: String,
}

/// Advisory preview of one product's balance after a checkout.
///
/// A negative `remaining_amount` shows up as `insufficient`, it does not
/// abort the preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub product_id: ProductId,
    pub current_amount: f64,
    pub requested_amount: f64,
    pub remaining_amount: f64,
    pub unit: String,
    pub alert_level: AlertLevel,
}

/// Outcome of applying a deduction batch.
///
/// Products are mutated independently; the caller (billing workflow) decides
/// whether any recorded error should block the surrounding sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionReport {
    pub all_succeeded: bool,
    pub errors: Vec<String>,
}

/// One flagged record from the standalone low-stock sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub product_id: ProductId,
    /// Containers on hand at sweep time.
    pub current_amount: u64,
    /// Operator-configured floor, in containers.
    pub threshold: u64,
    pub alert_level: AlertLevel,
}
