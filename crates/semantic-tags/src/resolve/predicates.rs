//! Item filters by semantic category or related Property.
//!
//! ```rust
//! use semantic_tags::{Item, ItemBuilder, TagRegistry};
//! use semantic_tags::resolve::predicates;
//!
//! let registry = TagRegistry::with_default_catalog().unwrap();
//! let items = vec![
//!     ItemBuilder::new("Kitchen").tag("Kitchen").build(),
//!     ItemBuilder::new("KitchenTemp").tags(["Sensor", "Temperature"]).build(),
//! ];
//! let points: Vec<&Item> = items.iter().filter(|&i| predicates::is_point(&registry)(i)).collect();
//! assert_eq!(points.len(), 1);
//! ```

use crate::model::{Category, Item, TagDefinition};
use crate::registry::TagRegistry;
use crate::resolve::Resolver;

fn has_category(registry: &TagRegistry, category: Category) -> impl Fn(&Item) -> bool + '_ {
    let resolver = Resolver::new(registry);
    move |item| resolver.category_of(item).is_some_and(|def| def.category == category)
}

/// Matches items classified as a Location.
pub fn is_location(registry: &TagRegistry) -> impl Fn(&Item) -> bool + '_ {
    has_category(registry, Category::Location)
}

/// Matches items classified as an Equipment.
pub fn is_equipment(registry: &TagRegistry) -> impl Fn(&Item) -> bool + '_ {
    has_category(registry, Category::Equipment)
}

/// Matches items classified as a Point.
pub fn is_point(registry: &TagRegistry) -> impl Fn(&Item) -> bool + '_ {
    has_category(registry, Category::Point)
}

/// Matches items whose semantic type is `tag` or a descendant of it.
pub fn is_a<'a>(registry: &'a TagRegistry, tag: &'a TagDefinition) -> impl Fn(&Item) -> bool + 'a {
    let resolver = Resolver::new(registry);
    let delimiter = registry.delimiter();
    move |item| resolver.category_of(item).is_some_and(|def| def.is_a(tag, delimiter))
}

/// Matches Points whose Property is `property` or a descendant of it.
pub fn relates_to<'a>(
    registry: &'a TagRegistry,
    property: &'a TagDefinition,
) -> impl Fn(&Item) -> bool + 'a {
    let resolver = Resolver::new(registry);
    let delimiter = registry.delimiter();
    move |item| resolver.property_of(item).is_some_and(|def| def.is_a(property, delimiter))
}
