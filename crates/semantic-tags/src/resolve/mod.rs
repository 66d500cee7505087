//! Semantic type resolution.
//!
//! Classifies an item from its tags alone. Tags are visited in
//! lexicographic order (the item's tag set is ordered), so a fixed registry
//! and tag set always give the same answer.

pub mod predicates;

use std::collections::BTreeSet;

use crate::model::{Category, Item, PointKind, TagDefinition};
use crate::registry::TagRegistry;

/// Stateless classifier over a [`TagRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r TagRegistry,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r TagRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry this resolver reads from.
    pub fn registry(&self) -> &'r TagRegistry {
        self.registry
    }

    /// Resolves the semantic type of a tag set.
    ///
    /// Returns the first tag whose category is not Property. Failing that,
    /// a tag set with at least one Property tag is a Point: a Sensor point
    /// if `read_only`, a Command point otherwise. Returns `None` for an
    /// unclassified tag set.
    pub fn resolve_category(
        &self,
        tags: &BTreeSet<String>,
        read_only: bool,
    ) -> Option<&'r TagDefinition> {
        let mut has_property = false;
        for def in self.definitions(tags) {
            if def.category.is_entity() {
                return Some(def);
            }
            has_property = true;
        }
        has_property.then(|| self.registry.point_fallback(PointKind::from_read_only(read_only)))
    }

    /// Resolves the Property a tag set relates to.
    ///
    /// Only a Point has a Property; for anything else this returns `None`.
    pub fn resolve_property(
        &self,
        tags: &BTreeSet<String>,
        read_only: bool,
    ) -> Option<&'r TagDefinition> {
        match self.resolve_category(tags, read_only) {
            Some(def) if def.category == Category::Point => self.first_property(tags),
            _ => None,
        }
    }

    /// Resolves the semantic type of an item.
    pub fn category_of(&self, item: &Item) -> Option<&'r TagDefinition> {
        self.resolve_category(&item.tags, item.read_only)
    }

    /// Resolves the Property of an item.
    pub fn property_of(&self, item: &Item) -> Option<&'r TagDefinition> {
        self.resolve_property(&item.tags, item.read_only)
    }

    /// Returns every non-Property type the item's tags resolve to, in tag
    /// order and without duplicates. Applies the same Point fallback as
    /// [`category_of`](Self::category_of).
    pub fn semantic_types(&self, item: &Item) -> Vec<&'r TagDefinition> {
        let mut types: Vec<&'r TagDefinition> = Vec::new();
        let mut has_property = false;
        for def in self.definitions(&item.tags) {
            if !def.category.is_entity() {
                has_property = true;
            } else if !types.iter().any(|t| t.id == def.id) {
                types.push(def);
            }
        }
        if types.is_empty() && has_property {
            types.push(self.registry.point_fallback(PointKind::from_read_only(item.read_only)));
        }
        types
    }

    /// Returns every Property the item's tags resolve to, in tag order and
    /// without duplicates, regardless of the item's category.
    pub fn properties(&self, item: &Item) -> Vec<&'r TagDefinition> {
        let mut properties: Vec<&'r TagDefinition> = Vec::new();
        for def in self.definitions(&item.tags) {
            if def.category == Category::Property && !properties.iter().any(|p| p.id == def.id) {
                properties.push(def);
            }
        }
        properties
    }

    pub(crate) fn first_property(&self, tags: &BTreeSet<String>) -> Option<&'r TagDefinition> {
        self.definitions(tags).find(|def| def.category == Category::Property)
    }

    fn definitions<'t>(
        &self,
        tags: &'t BTreeSet<String>,
    ) -> impl Iterator<Item = &'r TagDefinition> + use<'r, 't> {
        let registry = self.registry;
        tags.iter().filter_map(move |tag| registry.lookup(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemBuilder;

    fn registry() -> TagRegistry {
        TagRegistry::load(&[
            TagDefinition::new("Location_Room_Bedroom", Category::Location, "Bedroom"),
            TagDefinition::new("Equipment_Lightbulb", Category::Equipment, "Lightbulb"),
            TagDefinition::new("Point_Sensor", Category::Point, "Sensor"),
            TagDefinition::new("Point_Sensor_BinarySensor", Category::Point, "Binary Sensor"),
            TagDefinition::new("Point_Command", Category::Point, "Command"),
            TagDefinition::new("Property_Light", Category::Property, "Light"),
            TagDefinition::new("Property_Temperature", Category::Property, "Temperature"),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_category() {
        let registry = registry();
        let resolver = Resolver::new(&registry);

        let bedroom = ItemBuilder::new("Bedroom").tag("Bedroom").build();
        assert_eq!(resolver.category_of(&bedroom).unwrap().category, Category::Location);

        let sensor = ItemBuilder::new("FrontDoorSensor").tag("BinarySensor").build();
        assert_eq!(resolver.category_of(&sensor).unwrap().id, "Point_Sensor_BinarySensor");
    }

    #[test]
    fn test_resolve_category_skips_properties_and_unknown_tags() {
        let registry = registry();
        let resolver = Resolver::new(&registry);

        let lamp = ItemBuilder::new("Lamp").tags(["Light", "Lightbulb", "NotATag"]).build();
        assert_eq!(resolver.category_of(&lamp).unwrap().id, "Equipment_Lightbulb");
    }

    #[test]
    fn test_resolve_category_first_in_tag_order() {
        let registry = registry();
        let resolver = Resolver::new(&registry);

        // "Bedroom" sorts before "Lightbulb".
        let item = ItemBuilder::new("Odd").tags(["Lightbulb", "Bedroom"]).build();
        assert_eq!(resolver.category_of(&item).unwrap().id, "Location_Room_Bedroom");
    }

    #[test]
    fn test_property_only_falls_back_to_point() {
        let registry = registry();
        let resolver = Resolver::new(&registry);

        let reading = ItemBuilder::new("Temp").tag("Temperature").read_only(true).build();
        assert_eq!(resolver.category_of(&reading).unwrap().id, "Point_Sensor");
        assert_eq!(resolver.property_of(&reading).unwrap().id, "Property_Temperature");

        let dimmer = ItemBuilder::new("Dimmer").tag("Light").build();
        assert_eq!(resolver.category_of(&dimmer).unwrap().id, "Point_Command");
    }

    #[test]
    fn test_unclassified() {
        let registry = registry();
        let resolver = Resolver::new(&registry);

        assert!(resolver.category_of(&Item::new("Empty")).is_none());
        let unknown = ItemBuilder::new("Unknown").tag("Gizmo").build();
        assert!(resolver.category_of(&unknown).is_none());
        assert!(resolver.property_of(&unknown).is_none());
    }

    #[test]
    fn test_property_only_for_points() {
        let registry = registry();
        let resolver = Resolver::new(&registry);

        let lamp = ItemBuilder::new("Lamp").tags(["Lightbulb", "Light"]).build();
        assert!(resolver.property_of(&lamp).is_none());

        let sensor = ItemBuilder::new("Lux").tags(["BinarySensor", "Light", "Temperature"]).build();
        assert_eq!(resolver.property_of(&sensor).unwrap().id, "Property_Light");
    }

    #[test]
    fn test_semantic_types_and_properties() {
        let registry = registry();
        let resolver = Resolver::new(&registry);

        let item = ItemBuilder::new("Multi")
            .tags(["Lightbulb", "Equipment_Lightbulb", "Bedroom", "Light", "Temperature"])
            .build();
        let types: Vec<_> = resolver.semantic_types(&item).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(types, vec!["Location_Room_Bedroom", "Equipment_Lightbulb"]);

        let props: Vec<_> = resolver.properties(&item).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(props, vec!["Property_Light", "Property_Temperature"]);

        let reading = ItemBuilder::new("Temp").tag("Temperature").build();
        let types: Vec<_> = resolver.semantic_types(&reading).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(types, vec!["Point_Command"]);
    }
}
