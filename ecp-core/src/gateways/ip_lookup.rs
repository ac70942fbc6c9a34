use async_trait::async_trait;
use thiserror::Error;

use crate::entities::MapPoint;

#[derive(Debug, Error)]
#[error("IP location lookup failed: {0}")]
pub struct IpLookupError(pub String);

/// Coarse location of the caller as reported by an IP geolocation
/// service. The city is not always known.
#[derive(Debug, Clone, PartialEq)]
pub struct IpLocation {
    pub pos: MapPoint,
    pub city: Option<String>,
}

/// Resolves the caller's own public IP address to a coarse location.
#[async_trait]
pub trait IpLookupGateway {
    async fn locate_own_ip(&self) -> Result<IpLocation, IpLookupError>;
}
