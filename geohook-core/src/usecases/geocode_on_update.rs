use super::{is_geocoding_required, lookup_coordinates, prelude::*, resolve_address};

/// The fields that have to be written in addition
/// to the pending fields of the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDelta {
    pub lat: f64,
    pub lng: f64,
}

impl FieldDelta {
    pub fn apply_to(self, pending: &mut PendingFields) {
        pending.set_coordinates(MapPoint::from_lat_lng_deg(self.lat, self.lng));
    }
}

impl From<MapPoint> for FieldDelta {
    fn from(pos: MapPoint) -> Self {
        Self {
            lat: pos.lat(),
            lng: pos.lng(),
        }
    }
}

/// Geocodes the effective address of a changed record.
///
/// Returns `None` if the change does not affect the location.
/// Any failure aborts the whole operation, nothing is returned
/// that could be written partially.
pub fn geocode_on_update<R>(
    repo: &R,
    geocoding: &dyn GeoCodingGateway,
    target_entity_type: &str,
    notification: &ChangeNotification,
) -> Result<Option<FieldDelta>>
where
    R: RecordRepo,
{
    let ChangeNotification {
        entity_type,
        operation,
        entity_id,
        pending_fields,
    } = notification;
    if !is_geocoding_required(target_entity_type, entity_type, operation, pending_fields) {
        log::debug!("No geocoding required for {operation} of {entity_type} record {entity_id}");
        return Ok(None);
    }
    let address = resolve_address(repo, entity_type, *entity_id, pending_fields)?;
    let pos = lookup_coordinates(geocoding, &address)?;
    Ok(Some(pos.into()))
}
