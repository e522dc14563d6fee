use super::prelude::*;

use std::{cell::RefCell, collections::HashMap, result};

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub records: RefCell<HashMap<(String, EntityId), HashMap<String, String>>>,
    pub fetches: RefCell<Vec<(String, EntityId, Vec<String>)>>,
}

impl MockDb {
    pub fn insert_address(&self, entity_type: &str, id: u64, addr: Address) {
        let fields = AddressField::ALL
            .iter()
            .map(|f| (f.as_str().to_string(), addr.field(*f).to_string()))
            .collect();
        self.records
            .borrow_mut()
            .insert((entity_type.to_string(), EntityId::new(id)), fields);
    }
}

impl RecordRepo for MockDb {
    fn fetch_record(
        &self,
        entity_type: &str,
        id: EntityId,
        field_names: &[&str],
    ) -> RepoResult<StoredRecord> {
        self.fetches.borrow_mut().push((
            entity_type.to_string(),
            id,
            field_names.iter().map(ToString::to_string).collect(),
        ));
        let records = self.records.borrow();
        let fields = records
            .get(&(entity_type.to_string(), id))
            .ok_or(RepoError::NotFound)?;
        let fields = field_names
            .iter()
            .filter_map(|name| fields.get(*name).map(|v| (name.to_string(), v.clone())))
            .collect();
        Ok(StoredRecord { id, fields })
    }
}

pub struct MockGeoCoding {
    pub requests: RefCell<Vec<String>>,
    response: RefCell<Option<result::Result<GeocodeResponse, GeocodeError>>>,
}

impl MockGeoCoding {
    fn new(response: result::Result<GeocodeResponse, GeocodeError>) -> Self {
        Self {
            requests: RefCell::new(vec![]),
            response: RefCell::new(Some(response)),
        }
    }

    pub fn ok(lat: f64, lng: f64) -> Self {
        Self::new(Ok(GeocodeResponse {
            status: STATUS_OK.into(),
            results: vec![GeocodeCandidate {
                location: MapPoint::from_lat_lng_deg(lat, lng),
            }],
        }))
    }

    pub fn status(status: &str) -> Self {
        Self::new(Ok(GeocodeResponse {
            status: status.into(),
            results: vec![],
        }))
    }

    pub fn failing(err: GeocodeError) -> Self {
        Self::new(Err(err))
    }
}

impl GeoCodingGateway for MockGeoCoding {
    fn geocode_address(&self, address: &str) -> result::Result<GeocodeResponse, GeocodeError> {
        self.requests.borrow_mut().push(address.to_string());
        let response = self.response.borrow_mut().take();
        match response {
            // Successful answers may be repeated, errors are consumed.
            Some(Ok(res)) => {
                *self.response.borrow_mut() = Some(Ok(res.clone()));
                Ok(res)
            }
            Some(Err(err)) => Err(err),
            None => Err(GeocodeError::MalformedResponse("no response left".into())),
        }
    }
}
