use crate::geo::MapPoint;

/// Status reported by the provider if at least one location was found.
pub const STATUS_OK: &str = "OK";

/// The decoded answer of a geocoding provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeocodeResponse {
    pub status: String,
    pub results: Vec<GeocodeCandidate>,
}

impl GeocodeResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// A single candidate location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodeCandidate {
    pub location: MapPoint,
}

/// The interpreted outcome of a geocoding request.
///
/// `coordinates` are only present on success.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub status: String,
    pub coordinates: Option<MapPoint>,
}

impl GeocodeResult {
    pub fn success(pos: MapPoint) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            coordinates: Some(pos),
        }
    }

    pub fn failure(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            coordinates: None,
        }
    }
}
