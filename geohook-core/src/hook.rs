use crate::{
    entities::*,
    gateways::geocode::GeoCodingGateway,
    repositories::RecordRepo,
    usecases::{self, Error, FieldDelta},
};

/// Adds latitude and longitude to records of a single entity type
/// whenever their address changes.
#[derive(Debug, Clone)]
pub struct GeocodeHook<R, G> {
    entity_type: String,
    records: R,
    geocoding: G,
}

impl<R, G> GeocodeHook<R, G>
where
    R: RecordRepo,
    G: GeoCodingGateway,
{
    pub fn new(entity_type: impl Into<String>, records: R, geocoding: G) -> Self {
        Self {
            entity_type: entity_type.into(),
            records,
            geocoding,
        }
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn on_change(
        &self,
        notification: &ChangeNotification,
    ) -> Result<Option<FieldDelta>, Error> {
        usecases::geocode_on_update(
            &self.records,
            &self.geocoding,
            &self.entity_type,
            notification,
        )
    }

    /// Runs the hook against the mutable field set of the host.
    ///
    /// The fields are only modified on success.
    pub fn process_field_array(
        &self,
        operation: &str,
        entity_type: &str,
        id: EntityId,
        fields: &mut PendingFields,
    ) -> Result<(), Error> {
        let notification = ChangeNotification {
            entity_type: entity_type.to_string(),
            operation: operation.into(),
            entity_id: id,
            pending_fields: std::mem::take(fields),
        };
        let result = self.on_change(&notification);
        *fields = notification.pending_fields;
        if let Some(delta) = result? {
            delta.apply_to(fields);
        }
        Ok(())
    }
}
