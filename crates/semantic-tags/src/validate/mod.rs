//! Load-time validation of tag catalogs.
//!
//! Structural problems in the catalog are configuration errors and must
//! stop start-up before any item is classified. Ambiguous suffixes are not
//! checked here; the registry records them while indexing.

use rustc_hash::FxHashSet;

use crate::error::CatalogError;
use crate::model::id::{self, MalformedId};
use crate::model::{Category, TagDefinition};

/// Validates a catalog.
///
/// This checks that:
/// - Every id is non-empty and has no empty segments
/// - No full id is defined twice
/// - An id rooted at a category name (e.g. `Location_...`) is declared
///   with that category
///
/// Ids with a root segment that is not a category name are accepted.
pub fn validate_catalog(catalog: &[TagDefinition], delimiter: char) -> Result<(), CatalogError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for (position, def) in catalog.iter().enumerate() {
        validate_definition(position, def, delimiter)?;
        if !seen.insert(def.id.as_str()) {
            return Err(CatalogError::DuplicateId { id: def.id.clone() });
        }
    }
    Ok(())
}

/// Validates a single definition (independent of the rest of the catalog).
pub fn validate_definition(
    position: usize,
    def: &TagDefinition,
    delimiter: char,
) -> Result<(), CatalogError> {
    match id::check_id(&def.id, delimiter) {
        Ok(()) => {}
        Err(MalformedId::Empty) => return Err(CatalogError::EmptyId { position }),
        Err(MalformedId::EmptySegment) => {
            return Err(CatalogError::EmptySegment { id: def.id.clone() });
        }
    }

    if let Some(root) = Category::parse(id::root_segment(&def.id, delimiter)) {
        if root != def.category {
            return Err(CatalogError::CategoryMismatch {
                id: def.id.clone(),
                declared: def.category,
                root,
            });
        }
    }
    Ok(())
}
