use crate::config::{Geocoding, GeocodingGateway, RecordStore};
use anyhow::{anyhow, Result};
use geohook_gateways::{
    api_key::StaticApiKey, google_maps::GoogleMaps, json_file_store::JsonFileStore,
};

pub fn geocoding_gateway(cfg: &Geocoding) -> Result<GoogleMaps> {
    match &cfg.gateway {
        Some(GeocodingGateway::GoogleMaps {
            api_key,
            api_base_url,
        }) => {
            let api_key = api_key
                .as_ref()
                .ok_or_else(|| anyhow!("No Google Maps API key found"))?;
            GoogleMaps::try_new(api_base_url, StaticApiKey::new(api_key.as_str()), cfg.timeout)
        }
        None => Err(anyhow!("No geocoding gateway was configured")),
    }
}

pub fn record_store(cfg: &RecordStore) -> JsonFileStore {
    log::debug!("Use JSON file record store ({})", cfg.dir.display());
    JsonFileStore::new(&cfg.dir)
}
