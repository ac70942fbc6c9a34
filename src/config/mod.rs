use anyhow::{anyhow, Result};
use ecp_entities::geo::{Distance, MapPoint};
use ecp_gateways::DEFAULT_IP_LOOKUP_URL;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "ecoponto.toml";

const ENV_NAME_API_URL: &str = "ECOPONTO_API_URL";

const DEFAULT_GPS_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_RADIUS_KM: f64 = 5.0;

pub struct Config {
    pub api: Api,
    pub store: Store,
    pub locate: Locate,
    pub search: Search,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
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
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_url) = env::var(ENV_NAME_API_URL) {
            cfg.api.url = normalized_url(&api_url);
        }
        Ok(cfg)
    }
}

pub struct Api {
    /// Base URL of the community backend.
    pub url: String,
}

pub struct Store {
    /// JSON export of the registered collection points.
    pub points_file: PathBuf,
}

pub struct Locate {
    pub ip_fallback: bool,
    pub ip_lookup_url: String,
    pub gps_timeout: Duration,
    /// Stand-in device position for hosts without a geolocation service.
    pub position: Option<MapPoint>,
}

pub struct Search {
    pub radius: Distance,
}

fn normalized_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            api,
            store,
            locate,
            search,
        } = from;

        let raw::Api { url } = api.unwrap_or_default();
        let api = Api {
            url: normalized_url(&url),
        };

        let raw::Store { points_file } = store.unwrap_or_default();
        let store = Store { points_file };

        let raw::Locate {
            ip_fallback,
            ip_lookup_url,
            gps_timeout,
            position,
        } = locate.unwrap_or_default();

        let position = position
            .as_deref()
            .map(str::parse::<MapPoint>)
            .transpose()
            .map_err(|err| anyhow!("Invalid fixed position: {err}"))?;

        let locate = Locate {
            ip_fallback: ip_fallback.unwrap_or(true),
            ip_lookup_url: ip_lookup_url.unwrap_or_else(|| DEFAULT_IP_LOOKUP_URL.to_string()),
            gps_timeout: gps_timeout.unwrap_or(DEFAULT_GPS_TIMEOUT),
            position,
        };

        let raw::Search { radius_km } = search.unwrap_or_default();
        let radius_km = radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(anyhow!("Invalid search radius: {radius_km} km"));
        }
        let search = Search {
            radius: Distance::from_km(radius_km),
        };

        Ok(Self {
            api,
            store,
            locate,
            search,
        })
    }
}
