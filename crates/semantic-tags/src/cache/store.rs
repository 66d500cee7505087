//! In-memory [`ItemRegistry`].
//!
//! A minimal item store for tests and tooling. It keeps items by name and
//! notifies subscribers synchronously after each change, outside of its
//! item lock. Changes are serialized, so listeners see them in the order
//! they were made.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};

use crate::cache::feed::{ItemListener, ItemRegistry, SubscriptionId};
use crate::model::{Item, Neighbours};

/// In-memory item store.
///
/// `put` and `remove` hold the change lock while notifying, so a listener
/// may read the store but calling `put` or `remove` from a listener
/// deadlocks.
#[derive(Default)]
pub struct ItemStore {
    items: RwLock<BTreeMap<String, Item>>,
    listeners: RwLock<Vec<(SubscriptionId, Arc<dyn ItemListener>)>>,
    /// Held across a change and its notification.
    changes: Mutex<()>,
    next_subscription: AtomicU64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`, without notifications.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let store = Self::new();
        store
            .items
            .write()
            .extend(items.into_iter().map(|item| (item.name.clone(), item)));
        store
    }

    /// Adds or replaces an item and notifies subscribers.
    ///
    /// Returns the replaced item, if any.
    pub fn put(&self, item: Item) -> Option<Item> {
        let _change = self.changes.lock();
        let previous = self.items.write().insert(item.name.clone(), item.clone());
        for listener in self.listeners() {
            match &previous {
                Some(old) => listener.updated(old, &item),
                None => listener.added(&item),
            }
        }
        previous
    }

    /// Removes an item and notifies subscribers.
    pub fn remove(&self, name: &str) -> Option<Item> {
        let _change = self.changes.lock();
        let removed = self.items.write().remove(name)?;
        for listener in self.listeners() {
            listener.removed(&removed);
        }
        Some(removed)
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn listeners(&self) -> Vec<Arc<dyn ItemListener>> {
        self.listeners.read().iter().map(|(_, l)| Arc::clone(l)).collect()
    }
}

impl ItemRegistry for ItemStore {
    fn items(&self) -> Vec<Item> {
        self.items.read().values().cloned().collect()
    }

    fn get(&self, name: &str) -> Option<Item> {
        self.items.read().get(name).cloned()
    }

    fn neighbours(&self, item: &Item) -> Neighbours {
        let items = self.items.read();
        Neighbours {
            parents: item.group_names.iter().filter_map(|name| items.get(name).cloned()).collect(),
            members: item.member_names().filter_map(|name| items.get(name).cloned()).collect(),
        }
    }

    fn subscribe(&self, listener: Arc<dyn ItemListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }
}
