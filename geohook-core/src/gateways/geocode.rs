use crate::entities::GeocodeResponse;
use thiserror::Error;

/// Failures below the level of a decoded provider answer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("The geocoding provider responded with HTTP status {0}")]
    HttpStatus(u16),
    #[error("Malformed geocoding response: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub trait GeoCodingGateway {
    /// Sends a single request for the free text `address`.
    fn geocode_address(&self, address: &str) -> Result<GeocodeResponse, Error>;
}

impl<T> GeoCodingGateway for &T
where
    T: GeoCodingGateway + ?Sized,
{
    fn geocode_address(&self, address: &str) -> Result<GeocodeResponse, Error> {
        (**self).geocode_address(address)
    }
}
