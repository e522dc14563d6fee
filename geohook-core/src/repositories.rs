// Low-level record store access.
// The store is owned by the host, we only ever read from it.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait RecordRepo {
    /// Loads the named fields of a single record.
    fn fetch_record(
        &self,
        entity_type: &str,
        id: EntityId,
        field_names: &[&str],
    ) -> Result<StoredRecord>;
}

impl<T> RecordRepo for &T
where
    T: RecordRepo + ?Sized,
{
    fn fetch_record(
        &self,
        entity_type: &str,
        id: EntityId,
        field_names: &[&str],
    ) -> Result<StoredRecord> {
        (**self).fetch_record(entity_type, id, field_names)
    }
}
