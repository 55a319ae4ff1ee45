use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use salonerp_core::ProductId;

/// Customer attribute value used for quantity overrides.
///
/// An enumerated classification on the customer record (a gender bucket in
/// the current product). The engine treats it as an opaque key into a
/// policy's override map; an absent or unknown attribute means "no override".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerAttribute(String);

impl CustomerAttribute {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Consumption quantity with a required default and optional per-attribute
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityMap {
    /// Quantity used when no override matches the customer attribute.
    pub default: f64,
    /// Attribute-specific quantities, keyed by attribute value.
    #[serde(default)]
    pub overrides: HashMap<String, f64>,
}

impl QuantityMap {
    pub fn uniform(default: f64) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    pub fn with_override(mut self, attribute: impl Into<String>, quantity: f64) -> Self {
        self.overrides.insert(attribute.into(), quantity);
        self
    }

    /// Resolve the quantity for one customer.
    ///
    /// Picks the attribute-specific quantity when one is defined for the
    /// given attribute, else the default. `None` always resolves to the
    /// default.
    pub fn resolve(&self, attribute: Option<&CustomerAttribute>) -> f64 {
        attribute
            .and_then(|a| self.overrides.get(a.as_str()).copied())
            .unwrap_or(self.default)
    }
}

/// One consumable entry in a service definition: which product the service
/// draws down, how much, and in what unit of measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumablePolicy {
    pub product_id: ProductId,
    pub quantity: QuantityMap,
    /// Unit-of-measure label ("ml", "g", "pcs", ...), carried through to
    /// deductions and previews for display.
    pub unit: String,
}

impl ConsumablePolicy {
    pub fn new(product_id: ProductId, quantity: QuantityMap, unit: impl Into<String>) -> Self {
        Self {
            product_id,
            quantity,
            unit: unit.into(),
        }
    }
}
