use crate::{entities::EntityId, gateways::geocode, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Record {id} of type '{entity_type}' does not exist")]
    RecordNotFound { entity_type: String, id: EntityId },
    #[error("Could not geocode address: \"{address}\". Return status was: \"{status}\".")]
    GeocodeFailure { address: String, status: String },
    #[error(transparent)]
    Transport(#[from] geocode::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
