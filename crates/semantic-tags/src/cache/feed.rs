//! Interfaces of the external item store.

use std::sync::Arc;

use crate::model::{Item, Neighbours};

/// Handle returned by [`ItemRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Receives item changes from an [`ItemRegistry`].
///
/// Events for the same item must be delivered in the order the changes were
/// made.
pub trait ItemListener: Send + Sync {
    fn added(&self, item: &Item);
    fn updated(&self, old: &Item, item: &Item);
    fn removed(&self, item: &Item);
}

/// Read access to the live item graph plus its change feed.
///
/// Implementations must not hold the locks guarding their items or
/// listeners while calling listeners: a listener reads the registry back
/// while handling an event. A lock that only serializes changes may stay
/// held, in which case a listener must not change the registry itself.
pub trait ItemRegistry: Send + Sync {
    /// Returns every item currently known.
    fn items(&self) -> Vec<Item>;

    /// Returns the item with the given name.
    fn get(&self, name: &str) -> Option<Item>;

    /// Returns the live parents and members of `item`.
    ///
    /// The default looks every name up separately. Implementations that can
    /// should answer from one consistent view of the graph.
    fn neighbours(&self, item: &Item) -> Neighbours {
        Neighbours {
            parents: item.group_names.iter().filter_map(|name| self.get(name)).collect(),
            members: item.member_names().filter_map(|name| self.get(name)).collect(),
        }
    }

    /// Registers a listener for item changes.
    fn subscribe(&self, listener: Arc<dyn ItemListener>) -> SubscriptionId;

    /// Removes a listener. Returns false if it was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
