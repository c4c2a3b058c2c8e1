//! Inventory-based behavior auto-discovery.
//!
//! Each widget module submits a registration; `Runtime::init_all` builds and
//! installs every registered behavior against the document root, in
//! `Behavior::order` order.

use crate::behavior::Behavior;

/// Behavior registration entry for inventory.
pub struct BehaviorRegistration {
    /// Behavior name.
    pub name: &'static str,
    /// Factory function to create the behavior.
    pub factory: fn() -> Box<dyn Behavior>,
}

impl BehaviorRegistration {
    /// Create a new behavior registration.
    pub const fn new(name: &'static str, factory: fn() -> Box<dyn Behavior>) -> Self {
        Self { name, factory }
    }
}

inventory::collect!(BehaviorRegistration);

/// Get all registered behaviors.
pub fn registered_behaviors() -> impl Iterator<Item = &'static BehaviorRegistration> {
    inventory::iter::<BehaviorRegistration>()
}
