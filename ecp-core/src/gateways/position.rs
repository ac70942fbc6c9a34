use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::MapPoint;

/// Options for a device position request, mirroring the knobs of
/// common positioning APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRequest {
    /// Ask the device for the best fix it can provide.
    pub high_accuracy: bool,
    /// Give up after this long.
    pub timeout: Duration,
    /// Maximum acceptable age of a cached fix. Zero forces a fresh one.
    pub max_age: Duration,
}

impl Default for PositionRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_age: Duration::ZERO,
        }
    }
}

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("Permission to access the device position was denied")]
    PermissionDenied,
    #[error("The device position is unavailable")]
    Unavailable,
    #[error("Timeout while waiting for the device position")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

/// Provides the current position of the device this client runs on.
#[async_trait]
pub trait DevicePositionGateway {
    async fn current_position(&self, request: PositionRequest) -> Result<MapPoint, PositionError>;
}
