use std::time::Duration;

use anyhow::Result;
use geohook_core::gateways::{
    config::ApiKeyProvider,
    geocode::{Error, GeoCodingGateway},
};
use geohook_entities::{
    geo::MapPoint,
    geocode::{GeocodeCandidate, GeocodeResponse},
};
use reqwest::blocking::Client;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// A geocoding gateway based on the Google Maps Geocoding API.
pub struct GoogleMaps {
    api_base_url: Url,
    api_key: Box<dyn ApiKeyProvider + Send + Sync + 'static>,
    client: Client,
}

impl GoogleMaps {
    pub fn try_new<K>(api_base_url: &str, api_key: K, timeout: Option<Duration>) -> Result<Self>
    where
        K: ApiKeyProvider + Send + Sync + 'static,
    {
        let api_base_url = api_base_url.parse()?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            api_base_url,
            api_key: Box::new(api_key),
            client,
        })
    }

    fn request_url(&self, address: &str) -> Url {
        let api_key = self.api_key.geocode_api_key();
        let mut url = self.api_base_url.clone();
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", &api_key);
        url
    }
}

impl GeoCodingGateway for GoogleMaps {
    fn geocode_address(&self, address: &str) -> Result<GeocodeResponse, Error> {
        let url = self.request_url(address);
        log::debug!("Requesting location of '{address}' from {}", self.api_base_url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| Error::Other(err.into()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }
        let body = response.text().map_err(|err| Error::Other(err.into()))?;
        parse_response(&body)
    }
}

// Only the first candidate is decoded, the others are never used.
fn parse_response(body: &str) -> Result<GeocodeResponse, Error> {
    let malformed = |err: serde_json::Error| Error::MalformedResponse(err.to_string());
    let raw::Response { status, results } = serde_json::from_str(body).map_err(malformed)?;
    let results = match results.into_iter().next() {
        Some(first) => {
            let raw::Candidate { geometry } = serde_json::from_value(first).map_err(malformed)?;
            let location =
                MapPoint::from_lat_lng_deg(geometry.location.lat, geometry.location.lng);
            if !location.is_valid() {
                return Err(Error::MalformedResponse(format!(
                    "Invalid coordinates: {}, {}",
                    location.lat(),
                    location.lng()
                )));
            }
            vec![GeocodeCandidate { location }]
        }
        None => vec![],
    };
    Ok(GeocodeResponse { status, results })
}

mod raw {
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    pub struct Response {
        pub status: String,
        #[serde(default)]
        pub results: Vec<Value>,
    }

    #[derive(Deserialize)]
    pub struct Candidate {
        pub geometry: Geometry,
    }

    #[derive(Deserialize)]
    pub struct Geometry {
        pub location: Location,
    }

    #[derive(Deserialize)]
    pub struct Location {
        pub lat: f64,
        pub lng: f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_key::StaticApiKey;

    fn gateway() -> GoogleMaps {
        GoogleMaps::try_new(DEFAULT_API_BASE_URL, StaticApiKey::new("my-key"), None).unwrap()
    }

    #[test]
    fn request_url_with_encoded_address() {
        let url = gateway().request_url("An der Eickesmühle 38 41238 Mönchengladbach Germany");
        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/geocode/json\
             ?address=An+der+Eickesm%C3%BChle+38+41238+M%C3%B6nchengladbach+Germany\
             &key=my-key"
        );
    }

    #[test]
    fn request_url_keeps_surrounding_spaces() {
        let url = gateway().request_url(" Berlin ");
        let address = url
            .query_pairs()
            .find(|(k, _)| k == "address")
            .map(|(_, v)| v.into_owned());
        assert_eq!(address.as_deref(), Some(" Berlin "));
    }

    #[test]
    fn request_url_escapes_reserved_characters() {
        let url = gateway().request_url("A&key=evil #1");
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].1, "A&key=evil #1");
        assert_eq!(pairs[1].1, "my-key");
    }

    #[test]
    fn invalid_base_url() {
        assert!(GoogleMaps::try_new("not a url", StaticApiKey::new("k"), None).is_err());
    }

    #[test]
    fn parse_ok_response() {
        let body = r#"{
            "results": [
                { "geometry": { "location": { "lat": 18.23, "lng": 1.23 } }, "place_id": "x" },
                { "geometry": { "location": { "lat": 51.2, "lng": 6.4 } } }
            ],
            "status": "OK"
        }"#;
        let res = parse_response(body).unwrap();
        assert!(res.is_ok());
        assert_eq!(res.results.len(), 1);
        assert_eq!(
            res.results[0].location,
            MapPoint::from_lat_lng_deg(18.23, 1.23)
        );
    }

    #[test]
    fn ignore_malformed_alternatives() {
        let body = r#"{
            "results": [
                { "geometry": { "location": { "lat": 18.23, "lng": 1.23 } } },
                { "formatted_address": "no geometry" }
            ],
            "status": "OK"
        }"#;
        let res = parse_response(body).unwrap();
        assert_eq!(
            res.results[0].location,
            MapPoint::from_lat_lng_deg(18.23, 1.23)
        );
    }

    #[test]
    fn reject_out_of_range_coordinates() {
        let body = r#"{
            "results": [{ "geometry": { "location": { "lat": 91.0, "lng": 1.23 } } }],
            "status": "OK"
        }"#;
        assert!(matches!(
            parse_response(body),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn parse_zero_results() {
        let res = parse_response(r#"{"status":"ZERO_RESULTS"}"#).unwrap();
        assert_eq!(res.status, "ZERO_RESULTS");
        assert!(res.results.is_empty());
    }

    #[test]
    fn parse_malformed_response() {
        for body in ["", "<html></html>", r#"{"results":[]}"#, r#"{"status":"OK","results":[{}]}"#] {
            assert!(matches!(
                parse_response(body),
                Err(Error::MalformedResponse(_))
            ));
        }
    }
}
