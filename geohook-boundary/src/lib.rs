use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "entity-conversions")]
mod conv;

pub type PendingFields = BTreeMap<String, FieldValue>;

// Variant order matters: integers must be tried before floats.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    Null,
}

/// The payload the host sends for every record it is about to write.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ChangeNotification {
    pub operation      : String,
    pub entity_type    : String,
    pub entity_id      : u64,
    #[serde(default)]
    pub pending_fields : PendingFields,
}
