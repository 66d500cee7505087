//! Semantic tagging for home-automation item models.
//!
//! This crate classifies items into a fixed taxonomy (Location, Equipment,
//! Point, Property) from their tags and derives relations between them from
//! the item hierarchy.
//!
//! # Overview
//!
//! - **Tag registry**: indexes a catalog of hierarchical tag ids so that a
//!   full id or any trailing suffix resolves in O(1)
//! - **Resolver**: picks one semantic type per item, and the Property of a
//!   Point
//! - **Relation inference**: applies a static rule table over an item's
//!   parents and members
//! - **Metadata cache**: keeps the derived records current with an item
//!   store's change feed
//!
//! # Quick Start
//!
//! ```rust
//! use semantic_tags::{ItemBuilder, Relation, Resolver, TagRegistry, infer_relations};
//!
//! let registry = TagRegistry::with_default_catalog().unwrap();
//! let resolver = Resolver::new(&registry);
//!
//! let bedroom = ItemBuilder::new("Bedroom").tag("Bedroom").build();
//! let sensor = ItemBuilder::new("FrontDoorSensor")
//!     .tag("BinarySensor")
//!     .group("Bedroom")
//!     .build();
//!
//! let category = resolver.category_of(&sensor);
//! assert_eq!(category.unwrap().id, "Point_Sensor_BinarySensor");
//!
//! let relations = infer_relations(&resolver, &sensor, category, &[bedroom], &[]);
//! assert_eq!(relations[&Relation::HasLocation], "Bedroom");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (TagDefinition, Item, ResolvedMetadata)
//! - [`catalog`]: The built-in tag catalog
//! - [`registry`]: Suffix index over a catalog
//! - [`resolve`]: Category and Property resolution, item predicates
//! - [`relations`]: Relation rules and inference
//! - [`cache`]: Live metadata cache and the item store interfaces
//! - [`validate`]: Catalog validation
//! - [`error`]: Error types
//!
//! # Errors
//!
//! Unknown tags, ambiguous suffixes and dangling parent or member names are
//! ordinary data and never fail. Only an invalid catalog is an error, and
//! it is reported when the registry is loaded.

pub mod cache;
pub mod catalog;
pub mod error;
pub mod model;
pub mod registry;
pub mod relations;
pub mod resolve;
pub mod validate;

// Re-export commonly used types at crate root
pub use cache::{
    CacheOptions, ItemListener, ItemRegistry, ItemStore, ListenerId, MetadataCache, MetadataEvent,
    MetadataListener, SubscriptionId,
};
pub use catalog::default_catalog;
pub use error::{CatalogError, ErrorCode};
pub use model::{
    Category, Item, ItemBuilder, MetadataKey, Neighbours, PointKind, Relation, Relations,
    ResolvedMetadata, TagDefinition,
};
pub use registry::{Ambiguity, RegistryOptions, TagRegistry};
pub use relations::{MEMBER_RELATIONS, PARENT_RELATIONS, PROPERTY_RELATIONS, RelationRule, infer_relations};
pub use resolve::Resolver;
pub use validate::validate_catalog;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
