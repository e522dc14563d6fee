use std::{
    collections::{btree_map, BTreeMap},
    fmt,
};

use crate::geo::MapPoint;

pub const FIELD_LAT: &str = "lat";
pub const FIELD_LNG: &str = "lng";

/// A value the host is about to write into a field.
///
/// Integers and floats are kept apart so that values
/// the hook does not touch are handed back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// `true` only for a textual value that is exactly the empty string.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl From<String> for FieldValue {
    fn from(from: String) -> Self {
        Self::Text(from)
    }
}

impl From<&str> for FieldValue {
    fn from(from: &str) -> Self {
        Self::Text(from.to_owned())
    }
}

impl From<i64> for FieldValue {
    fn from(from: i64) -> Self {
        Self::Integer(from)
    }
}

impl From<f64> for FieldValue {
    fn from(from: f64) -> Self {
        Self::Number(from)
    }
}

impl From<bool> for FieldValue {
    fn from(from: bool) -> Self {
        Self::Bool(from)
    }
}

// The text a value contributes to an address:
// `true` is "1", `false` and null are empty.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => f.write_str("1"),
            Self::Bool(false) | Self::Null => Ok(()),
        }
    }
}

/// The set of fields that are being written by the host,
/// keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingFields(BTreeMap<String, FieldValue>);

impl PendingFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Both `lat` and `lng` are explicitly cleared.
    pub fn coordinates_cleared(&self) -> bool {
        let cleared = |name| self.get(name).is_some_and(FieldValue::is_empty_text);
        cleared(FIELD_LAT) && cleared(FIELD_LNG)
    }

    pub fn set_coordinates(&mut self, pos: MapPoint) {
        self.insert(FIELD_LAT, pos.lat());
        self.insert(FIELD_LNG, pos.lng());
    }
}

impl<K, V> FromIterator<(K, V)> for PendingFields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for PendingFields {
    type Item = (String, FieldValue);
    type IntoIter = btree_map::IntoIter<String, FieldValue>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
