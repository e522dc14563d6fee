use anyhow::{anyhow, Result};
use geohook_gateways::google_maps::DEFAULT_API_BASE_URL;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geohook.toml";

const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_RECORD_STORE_DIR: &str = "GEOHOOK_RECORD_STORE_DIR";

pub struct Config {
    pub hook: Hook,
    pub geocoding: Geocoding,
    pub record_store: RecordStore,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        apply_overrides(&mut raw_config, |name| env::var(name).ok());
        Self::try_from(raw_config)
    }
}

fn apply_overrides<F>(cfg: &mut raw::Config, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = var(ENV_NAME_GOOGLE_MAPS_API_KEY) {
        cfg.gateway
            .get_or_insert_with(Default::default)
            .google_maps
            .get_or_insert_with(Default::default)
            .api_key = Some(api_key);
    }
    if let Some(dir) = var(ENV_NAME_RECORD_STORE_DIR) {
        cfg.record_store = Some(raw::RecordStore { dir: dir.into() });
    }
}

pub struct Hook {
    /// Records of other types are never geocoded.
    pub entity_type: String,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub timeout: Option<Duration>,
}

pub enum GeocodingGateway {
    GoogleMaps {
        api_key: Option<String>,
        api_base_url: String,
    },
}

pub struct RecordStore {
    /// File system directory of the JSON record files.
    pub dir: PathBuf,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            hook,
            geocoding,
            gateway,
            record_store,
        } = from;

        let raw::Hook { entity_type } = hook.unwrap_or_default();
        if entity_type.trim().is_empty() {
            return Err(anyhow!("No entity type defined"));
        }
        let hook = Hook { entity_type };

        let raw::Geocoding { gateway: gw_name, timeout } = geocoding.unwrap_or_default();
        let geo_gateway = match gw_name {
            Some(raw::GeocodingGateway::GoogleMaps) => {
                let raw::GoogleMaps {
                    api_key,
                    api_base_url,
                } = gateway
                    .and_then(|g| g.google_maps)
                    .ok_or_else(|| anyhow!("Missing 'google-maps' gateway configuration"))?;
                let api_base_url =
                    api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
                log::info!("Use Google Maps geocoding gateway");
                Some(GeocodingGateway::GoogleMaps {
                    api_key,
                    api_base_url,
                })
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
            timeout,
        };

        let raw::RecordStore { dir } = record_store.unwrap_or_default();
        let record_store = RecordStore { dir };

        Ok(Self {
            hook,
            geocoding,
            record_store,
        })
    }
}
