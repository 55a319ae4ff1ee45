use std::collections::BTreeMap;

use salonerp_catalog::CustomerAttribute;
use salonerp_core::{DomainError, DomainResult, ProductId, ServiceId};
use salonerp_infra::{CatalogReader, StockStore};
use salonerp_inventory::AlertLevel;

use crate::types::{DeductionReport, ImpactSummary, LowStockAlert, UsageDeduction};

/// Consumption engine over a catalog read port and a stock store.
///
/// Each operation is one synchronous request. Application is per-product
/// read-modify-write (see [`StockStore`]): the batch is best-effort, failures
/// are collected rather than rolled back.
#[derive(Debug)]
pub struct ConsumptionEngine<C, S> {
    catalog: C,
    stock: S,
}

impl<C, S> ConsumptionEngine<C, S>
where
    C: CatalogReader,
    S: StockStore,
{
    pub fn new(catalog: C, stock: S) -> Self {
        Self { catalog, stock }
    }

    /// Resolve one service into its required deductions.
    ///
    /// Per consumable, the attribute-specific quantity wins over the policy
    /// default. A service with no consumables yields an empty list; an
    /// unresolved service id is `NotFound`.
    pub fn usage_for_service(
        &self,
        service_id: &ServiceId,
        attribute: Option<&CustomerAttribute>,
    ) -> DomainResult<Vec<UsageDeduction>> {
        let policy = self
            .catalog
            .consumable_policy(service_id)
            .ok_or(DomainError::NotFound)?;

        Ok(policy
            .iter()
            .map(|entry| UsageDeduction {
                product_id: entry.product_id,
                amount: entry.quantity.resolve(attribute),
                unit: entry.unit.clone(),
            })
            .collect())
    }

    /// Consolidate usage across all services of one checkout.
    ///
    /// Deductions for the same product are summed, never overwritten, so the
    /// result is independent of service order (and duplicate services count
    /// twice). Output order is deterministic (ascending product id).
    pub fn consolidated_usage(
        &self,
        service_ids: &[ServiceId],
        attribute: Option<&CustomerAttribute>,
    ) -> DomainResult<Vec<UsageDeduction>> {
        if service_ids.is_empty() {
            return Err(DomainError::validation("service list cannot be empty"));
        }

        let mut totals: BTreeMap<ProductId, UsageDeduction> = BTreeMap::new();
        for service_id in service_ids {
            for deduction in self.usage_for_service(service_id, attribute)? {
                totals
                    .entry(deduction.product_id)
                    .and_modify(|total| total.amount += deduction.amount)
                    .or_insert(deduction);
            }
        }

        tracing::debug!(
            services = service_ids.len(),
            products = totals.len(),
            "consolidated usage"
        );
        Ok(totals.into_values().collect())
    }

    /// Read-only impact preview for a checkout.
    ///
    /// Classifies every aggregated product against current stock without
    /// writing anything. A balance that would go negative is reported as
    /// `insufficient`, not raised as an error; a missing stock record aborts
    /// the preview with `NotFound`.
    pub fn preview_impact(
        &self,
        service_ids: &[ServiceId],
        attribute: Option<&CustomerAttribute>,
    ) -> DomainResult<Vec<ImpactSummary>> {
        let totals = self.consolidated_usage(service_ids, attribute)?;

        totals
            .into_iter()
            .map(|deduction| {
                let record = self
                    .stock
                    .get(&deduction.product_id)
                    .ok_or(DomainError::NotFound)?;

                let current_amount = record.primary_amount();
                let remaining_amount = current_amount - deduction.amount;
                // Remaining is already in fine units for both kinds (piece
                // capacity is 1), so it divides directly by the fine capacity
                // of the containers on hand at read time.
                let capacity = record.total_fine_capacity();
                let percentage_remaining = if capacity > 0.0 {
                    remaining_amount / capacity * 100.0
                } else {
                    0.0
                };

                Ok(ImpactSummary {
                    product_id: deduction.product_id,
                    current_amount,
                    requested_amount: deduction.amount,
                    remaining_amount,
                    unit: deduction.unit,
                    alert_level: AlertLevel::for_transaction(remaining_amount, percentage_remaining),
                })
            })
            .collect()
    }

    /// Apply a checkout's consolidated deductions against stock.
    ///
    /// Products are processed independently: a missing record or an
    /// insufficient balance is recorded in the report and the rest of the
    /// list still runs. Nothing is rolled back; the engine never vetoes the
    /// caller's sale.
    pub fn apply_deductions(
        &self,
        service_ids: &[ServiceId],
        attribute: Option<&CustomerAttribute>,
    ) -> DomainResult<DeductionReport> {
        let totals = self.consolidated_usage(service_ids, attribute)?;

        let mut errors = Vec::new();
        for deduction in totals {
            let Some(mut record) = self.stock.get(&deduction.product_id) else {
                tracing::warn!(product_id = %deduction.product_id, "stock record missing during deduction");
                errors.push(format!("product {} not found", deduction.product_id));
                continue;
            };

            if let Err(e) = record.deduct(deduction.amount) {
                tracing::warn!(product_id = %deduction.product_id, error = %e, "deduction failed");
                errors.push(e.to_string());
                continue;
            }

            self.stock.save(record);
        }

        let report = DeductionReport {
            all_succeeded: errors.is_empty(),
            errors,
        };
        tracing::info!(
            all_succeeded = report.all_succeeded,
            failures = report.errors.len(),
            "applied deductions"
        );
        Ok(report)
    }

    /// Standalone low-stock sweep, independent of any transaction.
    ///
    /// Measures each record's container count against its own configured
    /// threshold (strictly below 10% is `critical`, below 25% `low` — a
    /// looser cutoff than the preview's 20%, by inherited policy). Read-only;
    /// safe to run alongside checkouts. Only flagged records are returned,
    /// for the notifier to act on. A zero threshold means the operator opted
    /// the product out of sweeping.
    pub fn low_stock_sweep(&self) -> Vec<LowStockAlert> {
        let mut alerts: Vec<LowStockAlert> = self
            .stock
            .list()
            .into_iter()
            .filter(|record| record.low_stock_threshold > 0)
            .filter_map(|record| {
                let stock_percentage =
                    record.container_count as f64 / record.low_stock_threshold as f64 * 100.0;
                let alert_level = AlertLevel::for_sweep(stock_percentage);
                if alert_level == AlertLevel::Ok {
                    return None;
                }

                Some(LowStockAlert {
                    product_id: record.product_id,
                    current_amount: record.container_count,
                    threshold: record.low_stock_threshold,
                    alert_level,
                })
            })
            .collect();

        // Store listing order is not guaranteed.
        alerts.sort_by_key(|a| a.product_id);
        alerts
    }
}
