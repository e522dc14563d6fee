use super::prelude::*;

/// Decides whether a change of a record needs fresh coordinates.
///
/// Only updates of the `target_entity_type` are considered.
/// Clearing both `lat` and `lng` forces a lookup, otherwise
/// the mere presence of an address field is enough; the value
/// is not compared with the stored one.
pub fn is_geocoding_required(
    target_entity_type: &str,
    entity_type: &str,
    operation: &Operation,
    pending: &PendingFields,
) -> bool {
    if entity_type != target_entity_type || !operation.is_update() {
        return false;
    }
    if pending.coordinates_cleared() {
        return true;
    }
    AddressField::ALL
        .iter()
        .any(|field| pending.contains(field.as_str()))
}
