use super::prelude::*;

/// Interprets the answer of the provider for `address`.
///
/// Only the first candidate is taken into account.
/// A status other than `OK` yields a result without coordinates.
pub fn interpret_geocode_response(
    address: &str,
    response: GeocodeResponse,
) -> Result<GeocodeResult> {
    if !response.is_ok() {
        return Ok(GeocodeResult::failure(response.status));
    }
    let first = response.results.into_iter().next().ok_or_else(|| {
        GeocodeError::MalformedResponse(format!(
            "status {STATUS_OK} without any results for '{address}'"
        ))
    })?;
    Ok(GeocodeResult::success(first.location))
}

pub fn lookup_coordinates(geocoding: &dyn GeoCodingGateway, address: &str) -> Result<MapPoint> {
    let response = geocoding.geocode_address(address)?;
    let GeocodeResult {
        status,
        coordinates,
    } = interpret_geocode_response(address, response)?;
    let Some(pos) = coordinates else {
        return Err(Error::GeocodeFailure {
            address: address.to_string(),
            status,
        });
    };
    log::info!(
        "Resolved location of '{address}': {}, {}",
        pos.lat(),
        pos.lng()
    );
    Ok(pos)
}
