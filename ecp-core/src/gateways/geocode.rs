use async_trait::async_trait;
use thiserror::Error;

use crate::entities::MapPoint;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Empty address")]
    EmptyAddress,
    /// The service answered but could not resolve the address.
    /// The message is meant to be shown to the user as-is.
    #[error("{0}")]
    Rejected(String),
    #[error("Geocoding service unreachable: {0}")]
    Network(String),
}

/// A geocoded postal address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub pos: MapPoint,
    /// Canonical form of the address, if the service reports one.
    pub display_name: Option<String>,
}

/// Resolves free-form postal addresses to map coordinates.
#[async_trait]
pub trait GeoCodingGateway {
    async fn resolve_address(&self, address: &str) -> Result<GeocodedAddress, GeocodeError>;
}
