//! Hierarchical tag identifiers.
//!
//! A tag id is a list of segments joined by a delimiter, ordered from the
//! root category to the leaf, e.g. `Point_Sensor_BinarySensor`.

/// The segment delimiter used by the built-in catalog.
pub const DEFAULT_DELIMITER: char = '_';

/// Iterator over the right-aligned suffixes of a tag id.
///
/// Yields the full id first and then drops one leading segment at a time:
/// `A_B_C`, `B_C`, `C`.
#[derive(Debug, Clone)]
pub struct Suffixes<'a> {
    rest: Option<&'a str>,
    delimiter: char,
}

impl<'a> Iterator for Suffixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.rest?;
        self.rest = current.split_once(self.delimiter).map(|(_, tail)| tail);
        Some(current)
    }
}

/// Returns the suffixes of `id` under which a definition is registered.
pub fn suffixes(id: &str, delimiter: char) -> Suffixes<'_> {
    Suffixes {
        rest: if id.is_empty() { None } else { Some(id) },
        delimiter,
    }
}

/// Returns the root segment of `id`.
pub fn root_segment(id: &str, delimiter: char) -> &str {
    id.split(delimiter).next().unwrap_or(id)
}

/// Returns the leaf segment of `id`.
pub fn leaf_segment(id: &str, delimiter: char) -> &str {
    id.rsplit(delimiter).next().unwrap_or(id)
}

/// Returns true if `id` equals `ancestor` or extends it by whole segments.
///
/// `Point_Sensor_BinarySensor` extends `Point_Sensor` and `Point`, but not
/// `Point_Sens`.
pub fn extends(id: &str, ancestor: &str, delimiter: char) -> bool {
    match id.strip_prefix(ancestor) {
        Some("") => true,
        Some(rest) => rest.starts_with(delimiter),
        None => false,
    }
}

/// Why an id is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedId {
    Empty,
    EmptySegment,
}

/// Checks that `id` has at least one segment and no empty segments.
pub fn check_id(id: &str, delimiter: char) -> Result<(), MalformedId> {
    if id.is_empty() {
        return Err(MalformedId::Empty);
    }
    if id.split(delimiter).any(str::is_empty) {
        return Err(MalformedId::EmptySegment);
    }
    Ok(())
}
