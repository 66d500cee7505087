//! Suffix index over the tag catalog.
//!
//! Every definition is registered under its full id and under each
//! right-aligned suffix, so `Point_Sensor_BinarySensor`,
//! `Sensor_BinarySensor` and `BinarySensor` all resolve to the same entry.
//!
//! Registration runs category by category (Location, Equipment, Point,
//! Property) and in catalog order within a category. When two definitions
//! share a suffix the later one wins. This depends on catalog order, so
//! every shadowed suffix is recorded and logged.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::catalog::default_catalog;
use crate::error::CatalogError;
use crate::model::{Category, DEFAULT_DELIMITER, PointKind, TagDefinition, suffixes};
use crate::validate::validate_catalog;

lazy_static! {
    static ref SENSOR_POINT: TagDefinition =
        TagDefinition::new(PointKind::Sensor.tag_id(), Category::Point, "Sensor");
    static ref COMMAND_POINT: TagDefinition =
        TagDefinition::new(PointKind::Command.tag_id(), Category::Point, "Command");
}

/// Options for building a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Segment delimiter of tag ids.
    pub delimiter: char,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self { delimiter: DEFAULT_DELIMITER }
    }
}

/// A suffix claimed by more than one definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambiguity {
    /// The shared suffix.
    pub suffix: String,
    /// Id of the definition the suffix now resolves to.
    pub winner: String,
    /// Id of the definition that lost the suffix.
    pub shadowed: String,
}

/// Read-only index from tag ids and id suffixes to definitions.
#[derive(Debug, Clone)]
pub struct TagRegistry {
    options: RegistryOptions,
    /// Definitions in registration order.
    definitions: Vec<TagDefinition>,
    /// Suffix to position in `definitions`.
    index: FxHashMap<String, usize>,
    ambiguities: Vec<Ambiguity>,
}

impl TagRegistry {
    /// Builds a registry from a catalog using the default options.
    pub fn load(catalog: &[TagDefinition]) -> Result<Self, CatalogError> {
        Self::load_with_options(catalog, RegistryOptions::default())
    }

    /// Builds a registry from the built-in catalog.
    pub fn with_default_catalog() -> Result<Self, CatalogError> {
        Self::load(default_catalog())
    }

    /// Builds a registry from a catalog.
    ///
    /// The catalog is validated first; any configuration error aborts the
    /// load before a single entry is indexed.
    pub fn load_with_options(
        catalog: &[TagDefinition],
        options: RegistryOptions,
    ) -> Result<Self, CatalogError> {
        validate_catalog(catalog, options.delimiter)?;

        // Stable sort keeps catalog order within a category.
        let mut definitions = catalog.to_vec();
        definitions.sort_by_key(|def| def.category);

        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut ambiguities = Vec::new();
        for (position, def) in definitions.iter().enumerate() {
            for suffix in suffixes(&def.id, options.delimiter) {
                if let Some(previous) = index.insert(suffix.to_string(), position) {
                    let shadowed = &definitions[previous];
                    warn!(
                        suffix,
                        winner = %def.id,
                        shadowed = %shadowed.id,
                        "ambiguous tag suffix"
                    );
                    ambiguities.push(Ambiguity {
                        suffix: suffix.to_string(),
                        winner: def.id.clone(),
                        shadowed: shadowed.id.clone(),
                    });
                }
            }
        }

        debug!(
            definitions = definitions.len(),
            keys = index.len(),
            ambiguities = ambiguities.len(),
            "tag registry loaded"
        );

        Ok(Self {
            options,
            definitions,
            index,
            ambiguities,
        })
    }

    /// Replaces the whole index with one built from `catalog`.
    ///
    /// On error the current index is left untouched.
    pub fn reload(&mut self, catalog: &[TagDefinition]) -> Result<(), CatalogError> {
        *self = Self::load_with_options(catalog, self.options)?;
        Ok(())
    }

    /// Looks up a definition by full id or by any right-aligned suffix.
    pub fn lookup(&self, id: &str) -> Option<&TagDefinition> {
        self.index.get(id).map(|&position| &self.definitions[position])
    }

    /// Finds the first definition whose label matches, ignoring case.
    pub fn by_label(&self, label: &str) -> Option<&TagDefinition> {
        let wanted = label.to_lowercase();
        self.definitions.iter().find(|def| def.label.to_lowercase() == wanted)
    }

    /// Finds the first definition whose label or `locale` synonym matches,
    /// ignoring case.
    pub fn by_label_or_synonym(&self, text: &str, locale: &str) -> Option<&TagDefinition> {
        let wanted = text.to_lowercase();
        self.definitions.iter().find(|def| {
            def.label.to_lowercase() == wanted
                || def.synonyms_for(locale).iter().any(|s| s.to_lowercase() == wanted)
        })
    }

    /// Returns the Point definition standing in for `kind`.
    ///
    /// Uses the catalog entry with that exact id (joined with this
    /// registry's delimiter) when present, otherwise a built-in definition.
    pub fn point_fallback(&self, kind: PointKind) -> &TagDefinition {
        let id = kind.tag_id_with(self.options.delimiter);
        match self.lookup(&id) {
            Some(def) if def.id == id && def.category == Category::Point => def,
            _ => match kind {
                PointKind::Sensor => &*SENSOR_POINT,
                PointKind::Command => &*COMMAND_POINT,
            },
        }
    }

    /// Returns all definitions in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &TagDefinition> {
        self.definitions.iter()
    }

    /// Returns every suffix that was claimed by more than one definition.
    pub fn ambiguities(&self) -> &[Ambiguity] {
        &self.ambiguities
    }

    /// Returns the id delimiter.
    pub fn delimiter(&self) -> char {
        self.options.delimiter
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the registry holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
