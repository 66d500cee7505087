//! Relation inference.
//!
//! Relations are derived from the categories of an item, its parents and
//! its members using a fixed rule table. A relation name holds a single
//! target: when several parents (or members) match the same rule, the one
//! processed last wins. An item in two Locations therefore reports only
//! one `hasLocation`.

use tracing::{debug, trace};

use crate::model::{Category, Item, Relation, Relations, TagDefinition};
use crate::resolve::Resolver;

/// A `(source category, target category) -> relation` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationRule {
    pub source: Category,
    pub target: Category,
    pub relation: Relation,
}

impl RelationRule {
    const fn new(source: Category, target: Category, relation: Relation) -> Self {
        Self { source, target, relation }
    }

    /// Returns true if the rule applies between the two categories.
    pub fn matches(&self, source: Category, target: Category) -> bool {
        self.source == source && self.target == target
    }
}

/// Rules between an item and the groups it belongs to.
pub const PARENT_RELATIONS: &[RelationRule] = &[
    RelationRule::new(Category::Equipment, Category::Location, Relation::HasLocation),
    RelationRule::new(Category::Point, Category::Location, Relation::HasLocation),
    RelationRule::new(Category::Location, Category::Location, Relation::IsPartOf),
    RelationRule::new(Category::Equipment, Category::Equipment, Relation::IsPartOf),
    RelationRule::new(Category::Point, Category::Equipment, Relation::IsPointOf),
];

/// Rules between a group item and its members.
pub const MEMBER_RELATIONS: &[RelationRule] = &[RelationRule::new(
    Category::Equipment,
    Category::Point,
    Relation::HasPoint,
)];

/// Rules between an item and its own Property tag.
pub const PROPERTY_RELATIONS: &[RelationRule] = &[RelationRule::new(
    Category::Point,
    Category::Property,
    Relation::RelatesTo,
)];

/// Infers the relations of `item`.
///
/// `category` is the item's resolved semantic type; `parents` and `members`
/// are the live items behind its group names and member names. Parents and
/// members that do not classify contribute nothing. The result depends only
/// on the arguments and the registry behind `resolver`.
pub fn infer_relations(
    resolver: &Resolver<'_>,
    item: &Item,
    category: Option<&TagDefinition>,
    parents: &[Item],
    members: &[Item],
) -> Relations {
    let mut relations = Relations::new();
    let Some(category) = category.map(|def| def.category) else {
        return relations;
    };

    for rule in PROPERTY_RELATIONS.iter().filter(|rule| rule.source == category) {
        if let Some(property) = resolver.first_property(&item.tags) {
            insert(&mut relations, item, rule.relation, &property.id);
        }
    }

    apply_rules(resolver, &mut relations, item, category, parents, PARENT_RELATIONS);
    apply_rules(resolver, &mut relations, item, category, members, MEMBER_RELATIONS);
    relations
}

fn apply_rules(
    resolver: &Resolver<'_>,
    relations: &mut Relations,
    item: &Item,
    category: Category,
    others: &[Item],
    rules: &[RelationRule],
) {
    for other in others {
        let Some(other_category) = resolver.category_of(other).map(|def| def.category) else {
            continue;
        };
        for rule in rules.iter().filter(|rule| rule.matches(category, other_category)) {
            insert(relations, item, rule.relation, &other.name);
        }
    }
}

fn insert(relations: &mut Relations, item: &Item, relation: Relation, target: &str) {
    trace!(item = %item.name, %relation, to = target, "inferred relation");
    if let Some(previous) = relations.insert(relation, target.to_string()) {
        if previous != target {
            debug!(
                item = %item.name,
                %relation,
                previous = %previous,
                to = target,
                "relation target overwritten"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemBuilder;
    use crate::registry::TagRegistry;

    fn registry() -> TagRegistry {
        TagRegistry::load(&[
            TagDefinition::new("Location_Room", Category::Location, "Room"),
            TagDefinition::new("Location_Room_Bedroom", Category::Location, "Bedroom"),
            TagDefinition::new("Location_Floor", Category::Location, "Floor"),
            TagDefinition::new("Equipment_Refrigerator", Category::Equipment, "Refrigerator"),
            TagDefinition::new("Equipment_Kitchen", Category::Equipment, "Kitchen Block"),
            TagDefinition::new("Point_Sensor_BinarySensor", Category::Point, "Binary Sensor"),
            TagDefinition::new("Point_Sensor", Category::Point, "Sensor"),
            TagDefinition::new("Property_Temperature", Category::Property, "Temperature"),
        ])
        .unwrap()
    }

    fn infer(registry: &TagRegistry, item: &Item, parents: &[Item], members: &[Item]) -> Relations {
        let resolver = Resolver::new(registry);
        infer_relations(&resolver, item, resolver.category_of(item), parents, members)
    }

    #[test]
    fn test_unclassified_has_no_relations() {
        let registry = registry();
        let item = ItemBuilder::new("Thing").group("Bedroom").build();
        let bedroom = ItemBuilder::new("Bedroom").tag("Bedroom").build();
        assert!(infer(&registry, &item, &[bedroom], &[]).is_empty());
    }

    #[test]
    fn test_point_has_location() {
        let registry = registry();
        let bedroom = ItemBuilder::new("Bedroom").tag("Bedroom").build();
        let sensor = ItemBuilder::new("FrontDoorSensor").tag("BinarySensor").group("Bedroom").build();

        let relations = infer(&registry, &sensor, &[bedroom], &[]);
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[&Relation::HasLocation], "Bedroom");
    }

    #[test]
    fn test_equipment_parents() {
        let registry = registry();
        let room = ItemBuilder::new("Kitchen").tag("Room").build();
        let block = ItemBuilder::new("KitchenBlock").tag("Equipment_Kitchen").build();
        let fridge = ItemBuilder::new("Fridge").tag("Refrigerator").build();

        let relations = infer(&registry, &fridge, &[block, room], &[]);
        assert_eq!(relations[&Relation::HasLocation], "Kitchen");
        assert_eq!(relations[&Relation::IsPartOf], "KitchenBlock");
    }

    #[test]
    fn test_location_is_part_of() {
        let registry = registry();
        let floor = ItemBuilder::new("GroundFloor").tag("Floor").build();
        let room = ItemBuilder::new("Bedroom").tag("Bedroom").build();
        let relations = infer(&registry, &room, &[floor], &[]);
        assert_eq!(relations[&Relation::IsPartOf], "GroundFloor");
    }

    #[test]
    fn test_point_of_equipment_and_property() {
        let registry = registry();
        let fridge = ItemBuilder::new("Fridge").tag("Refrigerator").build();
        let temp = ItemBuilder::new("FridgeTemp").tags(["Sensor", "Temperature"]).build();

        let relations = infer(&registry, &temp, &[fridge], &[]);
        assert_eq!(relations[&Relation::IsPointOf], "Fridge");
        assert_eq!(relations[&Relation::RelatesTo], "Property_Temperature");
    }

    #[test]
    fn test_equipment_has_point() {
        let registry = registry();
        let door = ItemBuilder::new("FridgeDoor").tag("BinarySensor").build();
        let shelf = ItemBuilder::new("Shelf").build();
        let fridge = ItemBuilder::new("Fridge").tag("Refrigerator").member("FridgeDoor").member("Shelf").build();

        let relations = infer(&registry, &fridge, &[], &[door, shelf]);
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[&Relation::HasPoint], "FridgeDoor");
    }

    #[test]
    fn test_last_parent_wins() {
        let registry = registry();
        let first = ItemBuilder::new("Bedroom").tag("Bedroom").build();
        let second = ItemBuilder::new("Guestroom").tag("Room").build();
        let sensor = ItemBuilder::new("Motion").tag("BinarySensor").build();

        let relations = infer(&registry, &sensor, &[first.clone(), second.clone()], &[]);
        assert_eq!(relations[&Relation::HasLocation], "Guestroom");

        let relations = infer(&registry, &sensor, &[second, first], &[]);
        assert_eq!(relations[&Relation::HasLocation], "Bedroom");
    }

    #[test]
    fn test_unclassified_parent_is_skipped() {
        let registry = registry();
        let group = ItemBuilder::new("gAll").build();
        let sensor = ItemBuilder::new("Motion").tag("BinarySensor").build();
        assert!(infer(&registry, &sensor, &[group], &[]).is_empty());
    }

    #[test]
    fn test_rule_tables() {
        assert_eq!(PARENT_RELATIONS.len(), 5);
        assert!(
            MEMBER_RELATIONS
                .iter()
                .any(|r| r.matches(Category::Equipment, Category::Point) && r.relation == Relation::HasPoint)
        );
        assert!(!PARENT_RELATIONS.iter().any(|r| r.matches(Category::Location, Category::Equipment)));
    }
}
