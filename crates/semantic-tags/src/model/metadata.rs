//! Derived per-item semantic metadata.

use std::collections::BTreeMap;
use std::fmt;

/// Default namespace under which semantic metadata is published.
pub const NAMESPACE: &str = "semantics";

/// A named, directed relation derived from tag categories and hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relation {
    /// Equipment or Point located in a Location.
    HasLocation,
    /// Location inside a Location, or Equipment inside an Equipment.
    IsPartOf,
    /// Point belonging to an Equipment.
    IsPointOf,
    /// Equipment group containing a Point.
    HasPoint,
    /// Point measuring or controlling a Property.
    RelatesTo,
}

impl Relation {
    /// Returns the relation name as published (e.g. "hasLocation").
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::HasLocation => "hasLocation",
            Relation::IsPartOf => "isPartOf",
            Relation::IsPointOf => "isPointOf",
            Relation::HasPoint => "hasPoint",
            Relation::RelatesTo => "relatesTo",
        }
    }

    /// Parses a published relation name.
    pub fn parse(name: &str) -> Option<Relation> {
        match name {
            "hasLocation" => Some(Relation::HasLocation),
            "isPartOf" => Some(Relation::IsPartOf),
            "isPointOf" => Some(Relation::IsPointOf),
            "hasPoint" => Some(Relation::HasPoint),
            "relatesTo" => Some(Relation::RelatesTo),
            _ => None,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relation name to target (an item name, or a Property tag id for `relatesTo`).
pub type Relations = BTreeMap<Relation, String>;

/// Identifies a metadata record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetadataKey {
    pub namespace: String,
    pub item_name: String,
}

impl MetadataKey {
    pub fn new(namespace: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            item_name: item_name.into(),
        }
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.item_name)
    }
}

/// The resolved semantic type of an item plus its derived relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetadata {
    pub key: MetadataKey,
    /// Full id of the item's semantic type (e.g. `Point_Sensor_BinarySensor`).
    pub semantic_type: String,
    pub relations: Relations,
}

impl ResolvedMetadata {
    /// Returns the name of the item this record describes.
    pub fn item_name(&self) -> &str {
        &self.key.item_name
    }

    /// Returns the target of a relation, if present.
    pub fn relation(&self, relation: Relation) -> Option<&str> {
        self.relations.get(&relation).map(String::as_str)
    }
}
