use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use salonerp_catalog::ConsumablePolicy;
use salonerp_core::ServiceId;

/// Read port onto the service catalog's consumable policies.
///
/// The catalog itself (service CRUD) lives outside the engine; this is the
/// one lookup the engine needs. `None` means the service id does not resolve.
pub trait CatalogReader: Send + Sync {
    fn consumable_policy(&self, service_id: &ServiceId) -> Option<Vec<ConsumablePolicy>>;
}

impl<C> CatalogReader for Arc<C>
where
    C: CatalogReader + ?Sized,
{
    fn consumable_policy(&self, service_id: &ServiceId) -> Option<Vec<ConsumablePolicy>> {
        (**self).consumable_policy(service_id)
    }
}

/// In-memory catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    inner: RwLock<HashMap<ServiceId, Vec<ConsumablePolicy>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Register (or replace) the consumable policy for a service.
    pub fn upsert(&self, service_id: ServiceId, policy: Vec<ConsumablePolicy>) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(service_id, policy);
        }
    }
}

impl CatalogReader for InMemoryCatalog {
    fn consumable_policy(&self, service_id: &ServiceId) -> Option<Vec<ConsumablePolicy>> {
        let map = self.inner.read().ok()?;
        map.get(service_id).cloned()
    }
}
