use super::prelude::*;

/// Merges the stored address of a record with the pending changes
/// and returns the resulting query string.
pub fn resolve_address<R>(
    repo: &R,
    entity_type: &str,
    id: EntityId,
    pending: &PendingFields,
) -> Result<String>
where
    R: RecordRepo,
{
    let field_names = AddressField::ALL.map(AddressField::as_str);
    let record = repo
        .fetch_record(entity_type, id, &field_names)
        .map_err(|err| match err {
            RepoError::NotFound => Error::RecordNotFound {
                entity_type: entity_type.to_string(),
                id,
            },
            err => err.into(),
        })?;
    let mut address = record.address();
    address.overrule_with(pending);
    let query = address.to_query_string();
    log::debug!("Resolved address of {entity_type} record {id}: '{query}'");
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use geohook_entities::builders::*;

    fn db() -> MockDb {
        let db = MockDb::default();
        db.insert_address(
            "fe_users",
            5,
            Address::build()
                .address("A")
                .zip("Z")
                .city("C")
                .country("G")
                .finish(),
        );
        db
    }

    #[test]
    fn stored_address_without_changes() {
        let db = db();
        let addr =
            resolve_address(&db, "fe_users", EntityId::new(5), &PendingFields::new()).unwrap();
        assert_eq!(addr, "A Z C G");
    }

    #[test]
    fn pending_value_overrules_stored_value() {
        let db = db();
        let pending: PendingFields = [("address", "A2")].into_iter().collect();
        let addr = resolve_address(&db, "fe_users", EntityId::new(5), &pending).unwrap();
        assert_eq!(addr, "A2 Z C G");
    }

    #[test]
    fn cleared_field_yields_double_space() {
        let db = db();
        let pending: PendingFields = [("zip", ""), ("city", "C2")].into_iter().collect();
        let addr = resolve_address(&db, "fe_users", EntityId::new(5), &pending).unwrap();
        assert_eq!(addr, "A  C2 G");
    }

    #[test]
    fn only_address_fields_are_requested() {
        let db = db();
        resolve_address(&db, "fe_users", EntityId::new(5), &PendingFields::new()).unwrap();
        let fetches = db.fetches.borrow();
        assert_eq!(fetches.len(), 1);
        let (entity_type, id, fields) = &fetches[0];
        assert_eq!(entity_type, "fe_users");
        assert_eq!(*id, EntityId::new(5));
        assert_eq!(fields, &["address", "city", "country", "zip"]);
    }

    #[test]
    fn missing_record() {
        let db = db();
        let err = resolve_address(&db, "fe_users", EntityId::new(6), &PendingFields::new())
            .unwrap_err();
        match err {
            Error::RecordNotFound { entity_type, id } => {
                assert_eq!(entity_type, "fe_users");
                assert_eq!(id, EntityId::new(6));
            }
            other => panic!("Unexpected error: {other}"),
        }
    }
}
