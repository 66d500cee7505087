//! Data model types for the semantic layer.
//!
//! This module contains:
//! - Hierarchical tag ids
//! - Tag definitions and categories
//! - Item snapshots
//! - Resolved metadata records
//! - Builders (ergonomic construction)

pub mod builder;
pub mod id;
pub mod item;
pub mod metadata;
pub mod tag;

pub use builder::ItemBuilder;
pub use id::{DEFAULT_DELIMITER, Suffixes, suffixes};
pub use item::{Item, Neighbours};
pub use metadata::{MetadataKey, NAMESPACE, Relation, Relations, ResolvedMetadata};
pub use tag::{Category, PointKind, TagDefinition};
