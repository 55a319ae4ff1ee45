//! Consumable-policy model owned by the service catalog.
//!
//! Read-only to the consumption engine: policies are created and edited by
//! catalog management, the engine only resolves quantities out of them.

pub mod policy;

pub use policy::{ConsumablePolicy, CustomerAttribute, QuantityMap};
