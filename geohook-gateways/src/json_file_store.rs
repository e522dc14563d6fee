use std::{
    collections::HashMap,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use geohook_core::repositories::{Error as RepoError, RecordRepo};
use geohook_entities::{id::EntityId, record::StoredRecord};
use jfs::Store;
use serde_json::Value;

/// A record store that keeps every record in its own JSON file.
///
/// The records of an entity type live in a sub-directory
/// named like the type, the file name is the record id.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        Self { dir }
    }

    pub fn save_record(
        &self,
        entity_type: &str,
        id: EntityId,
        fields: &HashMap<String, Value>,
    ) -> io::Result<()> {
        let store = Store::new(self.entity_dir(entity_type)?)?;
        store.save_with_id(fields, &id.to_string())?;
        Ok(())
    }

    fn entity_dir(&self, entity_type: &str) -> io::Result<PathBuf> {
        let valid = !entity_type.is_empty()
            && entity_type
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("Invalid entity type '{entity_type}'"),
            ));
        }
        Ok(self.dir.join(entity_type))
    }
}

fn field_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl RecordRepo for JsonFileStore {
    fn fetch_record(
        &self,
        entity_type: &str,
        id: EntityId,
        field_names: &[&str],
    ) -> Result<StoredRecord, RepoError> {
        let dir = self.entity_dir(entity_type)?;
        if !dir.is_dir() {
            log::debug!("No records of type '{entity_type}' in {}", self.dir.display());
            return Err(RepoError::NotFound);
        }
        let store = Store::new(dir)?;
        let mut record: HashMap<String, Value> =
            store.get(&id.to_string()).map_err(|err| match err.kind() {
                ErrorKind::NotFound => RepoError::NotFound,
                _ => err.into(),
            })?;
        let fields = field_names
            .iter()
            .filter_map(|name| {
                record
                    .remove(*name)
                    .map(|value| (name.to_string(), field_to_string(value)))
            })
            .collect();
        Ok(StoredRecord { id, fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> HashMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn save_and_fetch_record() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(tmp.path());
        store
            .save_record(
                "fe_users",
                EntityId::new(5),
                &fields(json!({
                    "address": "An der Eickesmühle 38",
                    "zip": 41238,
                    "city": "Mönchengladbach",
                    "country": null,
                    "name": "John"
                })),
            )
            .unwrap();
        let record = store
            .fetch_record(
                "fe_users",
                EntityId::new(5),
                &["address", "city", "country", "zip"],
            )
            .unwrap();
        assert_eq!(record.id, EntityId::new(5));
        assert_eq!(record.get("address"), Some("An der Eickesmühle 38"));
        assert_eq!(record.get("zip"), Some("41238"));
        assert_eq!(record.get("city"), Some("Mönchengladbach"));
        assert_eq!(record.get("country"), Some(""));
        assert_eq!(record.get("name"), None);
    }

    #[test]
    fn missing_record() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(tmp.path());
        store
            .save_record("fe_users", EntityId::new(1), &fields(json!({})))
            .unwrap();
        let err = store
            .fetch_record("fe_users", EntityId::new(2), &["address"])
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[test]
    fn missing_entity_type() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(tmp.path());
        let err = store
            .fetch_record("fe_users", EntityId::new(1), &["address"])
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
        assert!(!tmp.path().join("fe_users").exists());
    }

    #[test]
    fn reject_invalid_entity_types() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(tmp.path());
        for entity_type in ["", "../fe_users", "fe users"] {
            let err = store
                .fetch_record(entity_type, EntityId::new(1), &["address"])
                .unwrap_err();
            assert!(matches!(err, RepoError::Io(_)));
        }
    }
}
