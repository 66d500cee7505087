//! Snapshot of an Item as seen by the semantic layer.
//!
//! Items are owned by an external store; this crate only reads them.

use std::collections::BTreeSet;

/// A named entity of the home-automation model.
///
/// Sets are ordered so that every iteration over tags, parents or members
/// is lexicographic and therefore reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    /// Unique item name.
    pub name: String,
    /// Assigned tag ids (full or suffix form).
    pub tags: BTreeSet<String>,
    /// Names of the groups this item is a member of.
    pub group_names: BTreeSet<String>,
    /// Member names; `Some` only if the item is itself a group.
    pub members: Option<BTreeSet<String>>,
    /// Whether the item's state is read-only. Only consulted when the item
    /// is classified as a Point from Property tags alone.
    pub read_only: bool,
}

impl Item {
    /// Creates an untagged, non-group item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns true if the item is a group.
    pub fn is_group(&self) -> bool {
        self.members.is_some()
    }

    /// Returns the member names (empty for non-groups).
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().flatten().map(String::as_str)
    }
}

/// The live parents and members of one item, read from a single coherent
/// view of the item graph.
///
/// Names that no longer resolve to an item are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbours {
    pub parents: Vec<Item>,
    pub members: Vec<Item>,
}
