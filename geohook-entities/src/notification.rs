use crate::{field::PendingFields, id::EntityId, operation::Operation};

/// What the host tells us about a record that is about to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeNotification {
    pub entity_type: String,
    pub operation: Operation,
    pub entity_id: EntityId,
    pub pending_fields: PendingFields,
}
