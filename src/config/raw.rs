use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("ecoponto.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub store: Option<Store>,
    pub locate: Option<Locate>,
    pub search: Option<Search>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub url: String,
}

impl Default for Api {
    fn default() -> Self {
        Config::default().api.expect("API configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Store {
    pub points_file: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Config::default().store.expect("Store configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Locate {
    pub ip_fallback: Option<bool>,
    pub ip_lookup_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub gps_timeout: Option<Duration>,
    pub position: Option<String>,
}

impl Default for Locate {
    fn default() -> Self {
        Config::default().locate.expect("Locate configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Search {
    pub radius_km: Option<f64>,
}

impl Default for Search {
    fn default() -> Self {
        Config::default().search.expect("Search configuration")
    }
}
