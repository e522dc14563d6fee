mod error;
mod geocode_on_update;
mod is_geocoding_required;
mod lookup_coordinates;
mod resolve_address;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::Error, geocode_on_update::*, is_geocoding_required::*, lookup_coordinates::*,
    resolve_address::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::geocode::{Error as GeocodeError, GeoCodingGateway},
        repositories::{Error as RepoError, RecordRepo},
    };
}
