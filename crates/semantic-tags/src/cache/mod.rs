//! Live semantic metadata for an item registry.
//!
//! [`MetadataCache`] keeps one [`ResolvedMetadata`] record per classified
//! item and follows the registry's change feed. Each change recomputes the
//! affected item from scratch and emits at most one [`MetadataEvent`].
//!
//! # Locking
//!
//! Changes are serialized by a writer lock held for the whole
//! recompute-and-notify step, so events for one item apply in delivery
//! order. Records sit behind a separate `RwLock` that is only held while
//! the map is read or swapped; [`MetadataCache::get_all`] never observes a
//! half-applied change. Listeners run with the writer lock held: they may
//! read the cache but must not feed changes back into it.
//!
//! The item registry only holds a weak handle to the cache. Dropping the
//! last [`Arc<MetadataCache>`] unsubscribes it from the feed.

pub mod feed;
pub mod store;

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::error::CatalogError;
use crate::model::{Item, MetadataKey, NAMESPACE, ResolvedMetadata, TagDefinition};
use crate::registry::TagRegistry;
use crate::relations::infer_relations;
use crate::resolve::Resolver;

pub use feed::{ItemListener, ItemRegistry, SubscriptionId};
pub use store::ItemStore;

/// Options for a [`MetadataCache`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOptions {
    /// Namespace of the published metadata keys.
    pub namespace: String,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self { namespace: NAMESPACE.to_string() }
    }
}

/// A change to the published metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataEvent {
    Added(ResolvedMetadata),
    Updated {
        old: ResolvedMetadata,
        new: ResolvedMetadata,
    },
    Removed(ResolvedMetadata),
}

impl MetadataEvent {
    /// Returns the name of the affected item.
    pub fn item_name(&self) -> &str {
        match self {
            MetadataEvent::Added(md) | MetadataEvent::Removed(md) => md.item_name(),
            MetadataEvent::Updated { new, .. } => new.item_name(),
        }
    }
}

/// Receives [`MetadataEvent`]s.
pub trait MetadataListener: Send + Sync {
    fn on_event(&self, event: &MetadataEvent);
}

impl<F> MetadataListener for F
where
    F: Fn(&MetadataEvent) + Send + Sync,
{
    fn on_event(&self, event: &MetadataEvent) {
        self(event)
    }
}

/// Handle returned by [`MetadataCache::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct WriterState {
    subscription: Option<SubscriptionId>,
}

/// The authoritative set of resolved metadata.
pub struct MetadataCache {
    options: CacheOptions,
    registry: Arc<TagRegistry>,
    items: Arc<dyn ItemRegistry>,
    writer: Mutex<WriterState>,
    records: RwLock<BTreeMap<String, ResolvedMetadata>>,
    listeners: RwLock<Vec<(ListenerId, Arc<dyn MetadataListener>)>>,
    next_listener: AtomicU64,
}

impl MetadataCache {
    /// Creates an empty, unsubscribed cache.
    pub fn new(
        registry: Arc<TagRegistry>,
        items: Arc<dyn ItemRegistry>,
        options: CacheOptions,
    ) -> Arc<Self> {
        Arc::new(Self {
            options,
            registry,
            items,
            writer: Mutex::new(WriterState::default()),
            records: RwLock::new(BTreeMap::new()),
            listeners: RwLock::new(Vec::new()),
            next_listener: AtomicU64::new(0),
        })
    }

    /// Loads `catalog`, then creates and starts a cache over `items`.
    ///
    /// A catalog error stops here, before any item is processed.
    pub fn start_with_catalog(
        catalog: &[TagDefinition],
        items: Arc<dyn ItemRegistry>,
        options: CacheOptions,
    ) -> Result<Arc<Self>, CatalogError> {
        let registry = Arc::new(TagRegistry::load(catalog)?);
        let cache = Self::new(registry, items, options);
        cache.start();
        Ok(cache)
    }

    /// Subscribes to the change feed and processes every known item.
    ///
    /// The subscription is made before the scan while the writer lock is
    /// held, so changes racing with start-up queue behind the scan. An
    /// `added` already reflected by the scan recomputes to the same record
    /// and is dropped as a no-op. Calling `start` on a started cache does
    /// nothing.
    pub fn start(self: &Arc<Self>) {
        let mut writer = self.writer.lock();
        if writer.subscription.is_some() {
            return;
        }
        let listener = Arc::new(FeedListener { cache: Arc::downgrade(self) });
        writer.subscription = Some(self.items.subscribe(listener));

        let items = self.items.items();
        for item in &items {
            self.refresh(item, Trigger::Added);
        }
        debug!(
            namespace = %self.options.namespace,
            items = items.len(),
            records = self.records.read().len(),
            "semantic metadata cache started"
        );
    }

    /// Unsubscribes from the change feed and drops every record without
    /// notifying listeners.
    pub fn stop(&self) {
        let mut writer = self.writer.lock();
        if let Some(id) = writer.subscription.take() {
            self.items.unsubscribe(id);
        }
        self.records.write().clear();
        debug!(namespace = %self.options.namespace, "semantic metadata cache stopped");
    }

    /// Returns true while subscribed to the change feed.
    pub fn is_started(&self) -> bool {
        self.writer.lock().subscription.is_some()
    }

    /// Handles a newly added item.
    ///
    /// An item whose record is already stored unchanged emits nothing.
    pub fn on_item_added(&self, item: &Item) {
        let _writer = self.writer.lock();
        self.refresh(item, Trigger::Added);
    }

    /// Handles a changed item by recomputing it from scratch.
    ///
    /// Emits `Updated` whenever a record existed and still does, even if
    /// the recomputed record is identical.
    pub fn on_item_updated(&self, old: &Item, item: &Item) {
        let _writer = self.writer.lock();
        if old.name != item.name {
            self.discard(&old.name);
        }
        self.refresh(item, Trigger::Updated);
    }

    /// Handles a removed item.
    pub fn on_item_removed(&self, item: &Item) {
        let _writer = self.writer.lock();
        self.discard(&item.name);
    }

    /// Returns all records ordered by item name.
    pub fn get_all(&self) -> Vec<ResolvedMetadata> {
        self.records.read().values().cloned().collect()
    }

    /// Returns the record of one item.
    pub fn get(&self, item_name: &str) -> Option<ResolvedMetadata> {
        self.records.read().get(item_name).cloned()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Returns the registry used for classification.
    pub fn registry(&self) -> &Arc<TagRegistry> {
        &self.registry
    }

    /// Registers a listener for metadata changes.
    pub fn add_listener(&self, listener: Arc<dyn MetadataListener>) -> ListenerId {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, listener));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    /// Computes the record for `item` from the registry and the live graph.
    fn compute(&self, item: &Item) -> Option<ResolvedMetadata> {
        let resolver = Resolver::new(&self.registry);
        let category = resolver.category_of(item)?;
        let neighbours = self.items.neighbours(item);
        let relations = infer_relations(
            &resolver,
            item,
            Some(category),
            &neighbours.parents,
            &neighbours.members,
        );
        Some(ResolvedMetadata {
            key: MetadataKey::new(self.options.namespace.clone(), item.name.clone()),
            semantic_type: category.id.clone(),
            relations,
        })
    }

    /// Recomputes `item` and publishes the change. Writer lock must be held.
    fn refresh(&self, item: &Item, trigger: Trigger) {
        let Some(record) = self.compute(item) else {
            self.discard(&item.name);
            return;
        };

        let event = {
            let mut records = self.records.write();
            match records.insert(item.name.clone(), record.clone()) {
                None => MetadataEvent::Added(record),
                Some(old) if trigger == Trigger::Added && old == record => return,
                Some(old) => MetadataEvent::Updated { old, new: record },
            }
        };
        self.emit(&event);
    }

    /// Drops the record of `item_name`, if any. Writer lock must be held.
    fn discard(&self, item_name: &str) {
        let removed = self.records.write().remove(item_name);
        if let Some(record) = removed {
            self.emit(&MetadataEvent::Removed(record));
        }
    }

    fn emit(&self, event: &MetadataEvent) {
        trace!(item = event.item_name(), ?event, "metadata changed");
        let listeners: Vec<Arc<dyn MetadataListener>> =
            self.listeners.read().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener.on_event(event);
        }
    }
}

impl Drop for MetadataCache {
    fn drop(&mut self) {
        if let Some(id) = self.writer.get_mut().subscription.take() {
            self.items.unsubscribe(id);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Added,
    Updated,
}

/// Subscription handed to the item registry. Events arriving after the
/// cache is gone are ignored.
struct FeedListener {
    cache: Weak<MetadataCache>,
}

impl ItemListener for FeedListener {
    fn added(&self, item: &Item) {
        if let Some(cache) = self.cache.upgrade() {
            cache.on_item_added(item);
        }
    }

    fn updated(&self, old: &Item, item: &Item) {
        if let Some(cache) = self.cache.upgrade() {
            cache.on_item_updated(old, item);
        }
    }

    fn removed(&self, item: &Item) {
        if let Some(cache) = self.cache.upgrade() {
            cache.on_item_removed(item);
        }
    }
}
