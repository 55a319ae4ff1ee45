use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use salonerp_core::{DomainError, DomainResult, ProductId};

/// Unit of measure kind for a stocked product.
///
/// Piece-kind products are counted in whole sellable items; continuous kinds
/// are measured in a fine-grained unit (ml, g, cm) held inside containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Piece,
    Volume,
    Weight,
    Length,
}

impl UnitKind {
    pub fn is_continuous(self) -> bool {
        !matches!(self, UnitKind::Piece)
    }
}

/// Authoritative stock balance for one product, in a dual representation:
/// sellable container count and fine-grained remaining quantity.
///
/// Exactly one of the two counters is primary depending on `unit`:
/// `fine_quantity` for continuous kinds, `container_count` for piece kinds.
/// The other is derived and must be recomputed together with the primary on
/// every mutation; all mutations therefore go through [`StockRecord::deduct`]
/// (or [`StockRecord::with_fine_quantity`] during setup), which keep the pair
/// in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub product_id: ProductId,
    pub name: String,
    pub unit: UnitKind,
    /// Number of sellable containers/items on hand.
    pub container_count: u64,
    /// Amount of the continuous unit held by one full container
    /// (meaningless for piece kinds, treated as 1).
    pub capacity_per_container: f64,
    /// Total remaining amount in the continuous unit; equals
    /// `container_count` for piece kinds.
    pub fine_quantity: f64,
    /// Operator-configured floor (in containers) used by the low-stock sweep.
    pub low_stock_threshold: u64,
    pub updated_at: DateTime<Utc>,
}

impl StockRecord {
    /// Create a record holding `container_count` full containers.
    ///
    /// The derived counter is initialized from the primary one; use
    /// [`StockRecord::with_fine_quantity`] afterwards for partially consumed
    /// continuous stock.
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        unit: UnitKind,
        container_count: u64,
        capacity_per_container: f64,
        low_stock_threshold: u64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !capacity_per_container.is_finite() || capacity_per_container < 0.0 {
            return Err(DomainError::validation(
                "capacity_per_container must be a non-negative number",
            ));
        }

        let fine_quantity = if unit.is_continuous() {
            container_count as f64 * capacity_per_container
        } else {
            container_count as f64
        };

        Ok(Self {
            product_id,
            name,
            unit,
            container_count,
            capacity_per_container,
            fine_quantity,
            low_stock_threshold,
            updated_at: Utc::now(),
        })
    }

    /// Override the fine quantity (continuous kinds) and resync the derived
    /// container count. Used when seeding partially consumed stock.
    pub fn with_fine_quantity(mut self, fine_quantity: f64) -> DomainResult<Self> {
        if !fine_quantity.is_finite() || fine_quantity < 0.0 {
            return Err(DomainError::validation(
                "fine_quantity must be a non-negative number",
            ));
        }
        self.fine_quantity = fine_quantity;
        self.sync_derived();
        Ok(self)
    }

    /// The primary counter for this record's unit kind.
    pub fn primary_amount(&self) -> f64 {
        if self.unit.is_continuous() {
            self.fine_quantity
        } else {
            self.container_count as f64
        }
    }

    /// Fine-unit capacity of the containers currently on hand
    /// (`container_count × capacity_per_container`; capacity 1 for pieces).
    pub fn total_fine_capacity(&self) -> f64 {
        if self.unit.is_continuous() {
            self.container_count as f64 * self.capacity_per_container
        } else {
            self.container_count as f64
        }
    }

    /// Deduct `amount` (containers for piece kinds, fine units otherwise),
    /// refusing to let either counter go negative.
    ///
    /// On success both counters are recomputed and `updated_at` is refreshed.
    /// On failure the record is left untouched.
    pub fn deduct(&mut self, amount: f64) -> DomainResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::validation(
                "deduction amount must be a non-negative number",
            ));
        }

        if self.unit.is_continuous() {
            if self.fine_quantity < amount {
                return Err(DomainError::insufficient_stock(format!(
                    "{}: have {}, need {}",
                    self.name, self.fine_quantity, amount
                )));
            }
            self.fine_quantity -= amount;
        } else {
            if (self.container_count as f64) < amount {
                return Err(DomainError::insufficient_stock(format!(
                    "{}: have {}, need {}",
                    self.name, self.container_count, amount
                )));
            }
            self.container_count -= amount as u64;
        }

        self.sync_derived();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Recompute the derived counter from the primary one.
    fn sync_derived(&mut self) {
        if self.unit.is_continuous() {
            self.container_count = if self.capacity_per_container > 0.0 {
                (self.fine_quantity / self.capacity_per_container).floor() as u64
            } else {
                0
            };
        } else {
            self.fine_quantity = self.container_count as f64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product_id() -> ProductId {
        ProductId::new()
    }

    fn continuous_record(container_count: u64, capacity: f64) -> StockRecord {
        StockRecord::new(
            test_product_id(),
            "Shampoo 100ml",
            UnitKind::Volume,
            container_count,
            capacity,
            5,
        )
        .unwrap()
    }

    fn piece_record(container_count: u64) -> StockRecord {
        StockRecord::new(
            test_product_id(),
            "Disposable razor",
            UnitKind::Piece,
            container_count,
            1.0,
            5,
        )
        .unwrap()
    }

    #[test]
    fn new_continuous_record_derives_fine_quantity_from_containers() {
        let rec = continuous_record(10, 100.0);

        assert_eq!(rec.fine_quantity, 1000.0);
        assert_eq!(rec.container_count, 10);
    }

    #[test]
    fn new_rejects_empty_name() {
        let err = StockRecord::new(test_product_id(), "  ", UnitKind::Piece, 1, 1.0, 0).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn continuous_deduct_resyncs_container_count() {
        let mut rec = continuous_record(2, 25.0).with_fine_quantity(40.0).unwrap();
        assert_eq!(rec.container_count, 1);

        rec.deduct(15.0).unwrap();

        assert_eq!(rec.fine_quantity, 25.0);
        assert_eq!(rec.container_count, 1);
    }

    #[test]
    fn continuous_deduct_refuses_to_go_negative() {
        let mut rec = continuous_record(1, 25.0);

        let err = rec.deduct(30.0).unwrap_err();

        assert!(matches!(err, DomainError::InsufficientStock(_)));
        assert_eq!(rec.fine_quantity, 25.0);
        assert_eq!(rec.container_count, 1);
    }

    #[test]
    fn piece_deduct_decrements_both_counters() {
        let mut rec = piece_record(3);

        rec.deduct(2.0).unwrap();

        assert_eq!(rec.container_count, 1);
        assert_eq!(rec.fine_quantity, 1.0);
    }

    #[test]
    fn piece_deduct_over_balance_leaves_record_untouched() {
        let mut rec = piece_record(3);

        let err = rec.deduct(5.0).unwrap_err();

        assert!(matches!(err, DomainError::InsufficientStock(_)));
        assert_eq!(rec.container_count, 3);
        assert_eq!(rec.fine_quantity, 3.0);
    }

    #[test]
    fn deduct_rejects_negative_amount() {
        let mut rec = piece_record(3);

        let err = rec.deduct(-1.0).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(rec.container_count, 3);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: after any successful deduction both counters stay
            /// non-negative and in sync.
            #[test]
            fn deduct_keeps_counters_non_negative_and_in_sync(
                containers in 0u64..1000,
                capacity in 1.0f64..500.0,
                amount in 0.0f64..100_000.0,
            ) {
                let mut rec = continuous_record(containers, capacity);

                if rec.deduct(amount).is_ok() {
                    prop_assert!(rec.fine_quantity >= 0.0);
                    prop_assert_eq!(
                        rec.container_count,
                        (rec.fine_quantity / rec.capacity_per_container).floor() as u64
                    );
                } else {
                    // Failed deduction must not mutate.
                    prop_assert_eq!(rec.container_count, containers);
                }
            }
        }
    }
}
