use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use salonerp_core::ProductId;
use salonerp_inventory::StockRecord;

/// Storage port for stock records.
///
/// `get` followed by `save` is a read-modify-write, not an atomic decrement:
/// two concurrent checkouts deducting the same product can both pass the
/// sufficiency check against the same starting balance (lost update).
/// Persistent implementors that need stronger guarantees should expose a
/// conditional decrement ("subtract N only if current >= N") instead of
/// relying on this pair.
pub trait StockStore: Send + Sync {
    fn get(&self, product_id: &ProductId) -> Option<StockRecord>;
    fn save(&self, record: StockRecord);
    /// All records, for the read-only low-stock sweep.
    fn list(&self) -> Vec<StockRecord>;
}

impl<S> StockStore for Arc<S>
where
    S: StockStore + ?Sized,
{
    fn get(&self, product_id: &ProductId) -> Option<StockRecord> {
        (**self).get(product_id)
    }

    fn save(&self, record: StockRecord) {
        (**self).save(record)
    }

    fn list(&self) -> Vec<StockRecord> {
        (**self).list()
    }
}

/// In-memory stock store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    inner: RwLock<HashMap<ProductId, StockRecord>>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl StockStore for InMemoryStockStore {
    fn get(&self, product_id: &ProductId) -> Option<StockRecord> {
        let map = self.inner.read().ok()?;
        map.get(product_id).cloned()
    }

    fn save(&self, record: StockRecord) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(record.product_id, record);
        }
    }

    fn list(&self) -> Vec<StockRecord> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.values().cloned().collect()
    }
}
