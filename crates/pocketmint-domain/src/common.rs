//! Shared traits for records kept in persisted collections.

use uuid::Uuid;

/// Exposes a stable identifier for records stored in a collection.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}
