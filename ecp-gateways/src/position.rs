use async_trait::async_trait;

use ecp_core::gateways::position::{DevicePositionGateway, PositionError, PositionRequest};
use ecp_entities::geo::MapPoint;

/// Stands in for a positioning device.
///
/// A terminal host has no geolocation service, so the coordinate comes
/// from configuration or the command line. Without one every request
/// fails like a browser with location services switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition {
    pos: Option<MapPoint>,
}

impl FixedPosition {
    #[must_use]
    pub const fn new(pos: Option<MapPoint>) -> Self {
        Self { pos }
    }
}

#[async_trait]
impl DevicePositionGateway for FixedPosition {
    async fn current_position(&self, _request: PositionRequest) -> Result<MapPoint, PositionError> {
        self.pos.ok_or(PositionError::Unavailable)
    }
}
