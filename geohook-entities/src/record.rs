use std::collections::HashMap;

use crate::{
    address::{Address, AddressField},
    id::EntityId,
};

/// Read-only snapshot of a stored record,
/// restricted to the requested fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoredRecord {
    pub id: EntityId,
    pub fields: HashMap<String, String>,
}

impl StoredRecord {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            fields: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Missing fields are read as empty strings.
    pub fn address(&self) -> Address {
        let mut addr = Address::default();
        for field in AddressField::ALL {
            if let Some(value) = self.get(field.as_str()) {
                *addr.field_mut(field) = value.to_owned();
            }
        }
        addr
    }
}
