//! Tag definitions and the semantic category taxonomy.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::CatalogError;
use crate::model::id;

/// The four top-level semantic roles a tag can denote.
///
/// The declaration order is also the order in which a registry registers
/// catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Location,
    Equipment,
    Point,
    Property,
}

impl Category {
    /// All categories in registration order.
    pub const ALL: [Category; 4] = [
        Category::Location,
        Category::Equipment,
        Category::Point,
        Category::Property,
    ];

    /// Parses a category from its name (e.g. "Equipment").
    pub fn parse(name: &str) -> Option<Category> {
        match name {
            "Location" => Some(Category::Location),
            "Equipment" => Some(Category::Equipment),
            "Point" => Some(Category::Point),
            "Property" => Some(Category::Property),
            _ => None,
        }
    }

    /// Returns the category name, which is also the root segment of its tag ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Location => "Location",
            Category::Equipment => "Equipment",
            Category::Point => "Point",
            Category::Property => "Property",
        }
    }

    /// Returns true for the categories that make an Item an entity
    /// (everything except Property).
    pub fn is_entity(&self) -> bool {
        !matches!(self, Category::Property)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only versus writable refinement of a Point inferred from Property tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// A read-only point.
    Sensor,
    /// A writable point.
    Command,
}

impl PointKind {
    /// Picks the kind from an Item's read-only flag.
    pub fn from_read_only(read_only: bool) -> PointKind {
        if read_only { PointKind::Sensor } else { PointKind::Command }
    }

    /// Id of the Point definition that stands in for this kind.
    pub fn tag_id(&self) -> &'static str {
        match self {
            PointKind::Sensor => "Point_Sensor",
            PointKind::Command => "Point_Command",
        }
    }

    /// Same as [`tag_id`](Self::tag_id), joined with `delimiter`.
    pub fn tag_id_with(&self, delimiter: char) -> String {
        let leaf = match self {
            PointKind::Sensor => "Sensor",
            PointKind::Command => "Command",
        };
        format!("{}{delimiter}{leaf}", Category::Point)
    }
}

/// A single entry of the tag catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    /// Fully qualified id, root to leaf (e.g. `Location_Room_Bedroom`).
    pub id: String,
    /// The category this tag denotes.
    pub category: Category,
    /// Default display label.
    pub label: String,
    /// Synonyms keyed by locale (e.g. "en", "de").
    pub synonyms: BTreeMap<String, Vec<String>>,
}

impl TagDefinition {
    /// Creates a definition without synonyms.
    pub fn new(id: impl Into<String>, category: Category, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            label: label.into(),
            synonyms: BTreeMap::new(),
        }
    }

    /// Builds a definition from untyped catalog data.
    ///
    /// Fails when the category is missing or not one of the four known names.
    pub fn from_parts(
        id: impl Into<String>,
        category: Option<&str>,
        label: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        let category = match category {
            None => return Err(CatalogError::MissingCategory { id }),
            Some(name) => match Category::parse(name) {
                Some(category) => category,
                None => {
                    return Err(CatalogError::UnknownCategory {
                        id,
                        name: name.to_string(),
                    });
                }
            },
        };
        Ok(Self::new(id, category, label))
    }

    /// Adds synonyms for a locale.
    pub fn with_synonyms<I, S>(mut self, locale: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms
            .entry(locale.into())
            .or_default()
            .extend(synonyms.into_iter().map(Into::into));
        self
    }

    /// Returns the synonyms registered for `locale`.
    pub fn synonyms_for(&self, locale: &str) -> &[String] {
        self.synonyms.get(locale).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if this tag is `other` or a descendant of it.
    pub fn is_a(&self, other: &TagDefinition, delimiter: char) -> bool {
        self.category == other.category && id::extends(&self.id, &other.id, delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("location"), None);
        assert!(!Category::Property.is_entity());
        assert!(Category::Point.is_entity());
    }

    #[test]
    fn test_from_parts() {
        let def = TagDefinition::from_parts("Property_Humidity", Some("Property"), "Humidity").unwrap();
        assert_eq!(def.category, Category::Property);

        let err = TagDefinition::from_parts("Property_Humidity", None, "Humidity").unwrap_err();
        assert!(matches!(err, CatalogError::MissingCategory { .. }));

        let err = TagDefinition::from_parts("Thing_Humidity", Some("Thing"), "Humidity").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { ref name, .. } if name == "Thing"));
    }

    #[test]
    fn test_synonyms() {
        let def = TagDefinition::new("Location_Room_Kitchen", Category::Location, "Kitchen")
            .with_synonyms("en", ["Kitchens", "Cookery"])
            .with_synonyms("de", ["Küche"]);
        assert_eq!(def.synonyms_for("en"), ["Kitchens", "Cookery"]);
        assert_eq!(def.synonyms_for("de"), ["Küche"]);
        assert!(def.synonyms_for("fr").is_empty());
    }

    #[test]
    fn test_is_a() {
        let sensor = TagDefinition::new("Point_Sensor", Category::Point, "Sensor");
        let binary = TagDefinition::new("Point_Sensor_BinarySensor", Category::Point, "Binary Sensor");
        let equipment_sensor = TagDefinition::new("Equipment_Sensor", Category::Equipment, "Sensor");

        assert!(binary.is_a(&sensor, '_'));
        assert!(sensor.is_a(&sensor, '_'));
        assert!(!sensor.is_a(&binary, '_'));
        assert!(!equipment_sensor.is_a(&sensor, '_'));
    }

    #[test]
    fn test_point_kind() {
        assert_eq!(PointKind::from_read_only(true), PointKind::Sensor);
        assert_eq!(PointKind::from_read_only(false).tag_id(), "Point_Command");
        assert_eq!(PointKind::Sensor.tag_id_with('_'), PointKind::Sensor.tag_id());
        assert_eq!(PointKind::Command.tag_id_with('.'), "Point.Command");
    }
}
