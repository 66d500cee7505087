//! Builder API for ergonomic Item construction.
//!
//! # Example
//!
//! ```rust
//! use semantic_tags::model::builder::ItemBuilder;
//!
//! let sensor = ItemBuilder::new("FrontDoorSensor")
//!     .tag("BinarySensor")
//!     .group("Bedroom")
//!     .read_only(true)
//!     .build();
//!
//! assert!(sensor.tags.contains("BinarySensor"));
//! assert!(!sensor.is_group());
//! ```

use std::collections::BTreeSet;

use crate::model::Item;

/// Builder for constructing an [`Item`] snapshot.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    /// Creates a new builder for a non-group item.
    pub fn new(name: impl Into<String>) -> Self {
        Self { item: Item::new(name) }
    }

    /// Creates a new builder for a group item with no members yet.
    pub fn group_item(name: impl Into<String>) -> Self {
        let mut item = Item::new(name);
        item.members = Some(BTreeSet::new());
        Self { item }
    }

    /// Adds a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.item.tags.insert(tag.into());
        self
    }

    /// Adds several tags at once.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Makes the item a member of the named group.
    pub fn group(mut self, group_name: impl Into<String>) -> Self {
        self.item.group_names.insert(group_name.into());
        self
    }

    /// Adds a member; turns the item into a group if it was not one.
    pub fn member(mut self, member_name: impl Into<String>) -> Self {
        self.item
            .members
            .get_or_insert_with(BTreeSet::new)
            .insert(member_name.into());
        self
    }

    /// Sets the read-only flag.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.item.read_only = read_only;
        self
    }

    /// Builds the item.
    pub fn build(self) -> Item {
        self.item
    }
}
