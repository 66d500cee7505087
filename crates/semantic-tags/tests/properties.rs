//! Property tests for lookup and classification.

use std::collections::BTreeSet;

use proptest::prelude::*;
use semantic_tags::{Category, Item, Resolver, TagDefinition, TagRegistry, default_catalog};

fn segment() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,6}"
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

/// A definition rooted at its category name, with 1-3 further segments.
fn definition() -> impl Strategy<Value = TagDefinition> {
    (category(), prop::collection::vec(segment(), 1..4)).prop_map(|(category, segments)| {
        let id = format!("{}_{}", category, segments.join("_"));
        TagDefinition::new(id, category, segments.join(" "))
    })
}

/// Tags drawn from the built-in catalog's suffixes plus some noise.
fn catalog_tags() -> impl Strategy<Value = BTreeSet<String>> {
    let known: Vec<String> = default_catalog()
        .iter()
        .flat_map(|def| semantic_tags::model::suffixes(&def.id, '_').map(str::to_string).collect::<Vec<_>>())
        .collect();
    let tag = prop_oneof![
        4 => prop::sample::select(known),
        1 => segment(),
    ];
    prop::collection::btree_set(tag, 0..5)
}

fn item(tags: BTreeSet<String>, read_only: bool) -> Item {
    let mut item = Item::new("Probe");
    item.tags = tags;
    item.read_only = read_only;
    item
}

proptest! {
    #[test]
    fn test_every_suffix_resolves_without_collisions(def in definition()) {
        let registry = TagRegistry::load(std::slice::from_ref(&def)).unwrap();
        for suffix in semantic_tags::model::suffixes(&def.id, '_') {
            prop_assert_eq!(registry.lookup(suffix), Some(&def));
        }
    }

    #[test]
    fn test_lookup_hits_winner_or_own_definition(defs in prop::collection::vec(definition(), 1..12)) {
        let mut ids = BTreeSet::new();
        let defs: Vec<_> = defs.into_iter().filter(|d| ids.insert(d.id.clone())).collect();
        let registry = TagRegistry::load(&defs).unwrap();
        for def in &defs {
            // Full ids of the same depth and root never collide, but a full id can
            // be a suffix of a longer one; the index holds exactly one winner.
            for suffix in semantic_tags::model::suffixes(&def.id, '_') {
                let found = registry.lookup(suffix).unwrap();
                prop_assert!(found == def || registry.ambiguities().iter().any(|a| a.suffix == suffix));
            }
        }
    }

    #[test]
    fn test_classification_is_deterministic(tags in catalog_tags(), read_only in any::<bool>()) {
        let registry = TagRegistry::with_default_catalog().unwrap();
        let resolver = Resolver::new(&registry);
        let probe = item(tags, read_only);

        prop_assert_eq!(resolver.category_of(&probe), resolver.category_of(&probe));
        prop_assert_eq!(resolver.property_of(&probe), resolver.property_of(&probe));

        let rebuilt = TagRegistry::with_default_catalog().unwrap();
        let other = Resolver::new(&rebuilt);
        prop_assert_eq!(
            resolver.category_of(&probe).map(|d| &d.id),
            other.category_of(&probe).map(|d| &d.id)
        );
    }

    #[test]
    fn test_category_is_an_entity(tags in catalog_tags(), read_only in any::<bool>()) {
        let registry = TagRegistry::with_default_catalog().unwrap();
        let resolver = Resolver::new(&registry);
        if let Some(def) = resolver.category_of(&item(tags, read_only)) {
            prop_assert!(matches!(def.category, Category::Location | Category::Equipment | Category::Point));
        }
    }

    #[test]
    fn test_property_implies_point(tags in catalog_tags(), read_only in any::<bool>()) {
        let registry = TagRegistry::with_default_catalog().unwrap();
        let resolver = Resolver::new(&registry);
        let probe = item(tags, read_only);
        if let Some(property) = resolver.property_of(&probe) {
            prop_assert_eq!(property.category, Category::Property);
            prop_assert_eq!(resolver.category_of(&probe).map(|d| d.category), Some(Category::Point));
        }
    }
}
