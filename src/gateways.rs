use crate::config::Config;
use ecp_application::prelude::LocationGateways;
use ecp_entities::geo::MapPoint;
use ecp_frontend_api::PublicApi;
use ecp_gateways::{ApiGeocode, FixedPosition, IpApi};
use std::sync::Arc;

pub fn public_api(config: &Config) -> PublicApi {
    PublicApi::new(config.api.url.clone())
}

/// Wires the location fallback chain from the configuration.
///
/// A position given on the command line wins over the configured one.
pub fn location_gateways(config: &Config, position: Option<MapPoint>) -> LocationGateways {
    let position = position.or(config.locate.position);
    if position.is_none() {
        log::info!("No fixed device position configured");
    }
    LocationGateways {
        device: Arc::new(FixedPosition::new(position)),
        ip: Arc::new(IpApi::new(config.locate.ip_lookup_url.clone())),
        geocoder: Arc::new(ApiGeocode::new(public_api(config))),
    }
}
