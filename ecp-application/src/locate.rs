use std::sync::Arc;

use async_trait::async_trait;

use super::*;
use crate::usecases::{ResolveError, ResolveLocation};

type ResolveResult = std::result::Result<ResolvedLocation, ResolveError>;

/// The gateways a location chain can draw on.
#[derive(Clone)]
pub struct LocationGateways {
    pub device: Arc<dyn DevicePositionGateway + Send + Sync>,
    pub ip: Arc<dyn IpLookupGateway + Send + Sync>,
    pub geocoder: Arc<dyn GeoCodingGateway + Send + Sync>,
}

#[derive(Debug, Clone, Default)]
pub struct LocateOptions {
    pub request: PositionRequest,
    /// Try the IP lookup when the device position fails.
    pub ip_fallback: bool,
    /// A manual address skips the device entirely.
    pub address: Option<String>,
}

/// Device-position step of the fallback chain.
pub struct GpsStrategy {
    device: Arc<dyn DevicePositionGateway + Send + Sync>,
    request: PositionRequest,
}

#[async_trait]
impl ResolveLocation for GpsStrategy {
    fn source(&self) -> LocationSource {
        LocationSource::Gps
    }

    async fn resolve(&self) -> ResolveResult {
        let request = self.request;
        // The device gateway is not trusted to honor the timeout itself.
        let pos = tokio::time::timeout(request.timeout, self.device.current_position(request))
            .await
            .map_err(|_| PositionError::Timeout)??;
        Ok(ResolvedLocation {
            pos,
            source: LocationSource::Gps,
            city: None,
        })
    }
}

pub struct IpStrategy {
    lookup: Arc<dyn IpLookupGateway + Send + Sync>,
}

#[async_trait]
impl ResolveLocation for IpStrategy {
    fn source(&self) -> LocationSource {
        LocationSource::IpLookup
    }

    async fn resolve(&self) -> ResolveResult {
        let IpLocation { pos, city } = self.lookup.locate_own_ip().await?;
        Ok(ResolvedLocation {
            pos,
            source: LocationSource::IpLookup,
            city,
        })
    }
}

pub struct GeocodeStrategy {
    geocoder: Arc<dyn GeoCodingGateway + Send + Sync>,
    address: String,
}

#[async_trait]
impl ResolveLocation for GeocodeStrategy {
    fn source(&self) -> LocationSource {
        LocationSource::Geocode
    }

    async fn resolve(&self) -> ResolveResult {
        let GeocodedAddress { pos, display_name } =
            self.geocoder.resolve_address(&self.address).await?;
        Ok(ResolvedLocation {
            pos,
            source: LocationSource::Geocode,
            city: display_name,
        })
    }
}

/// Assembles the prioritized strategy list for one resolution attempt.
#[must_use]
pub fn location_chain(
    gateways: &LocationGateways,
    options: LocateOptions,
) -> Vec<Box<dyn ResolveLocation>> {
    let LocateOptions {
        request,
        ip_fallback,
        address,
    } = options;
    if let Some(address) = address {
        return vec![Box::new(GeocodeStrategy {
            geocoder: gateways.geocoder.clone(),
            address,
        })];
    }
    let mut chain: Vec<Box<dyn ResolveLocation>> = vec![Box::new(GpsStrategy {
        device: gateways.device.clone(),
        request,
    })];
    if ip_fallback {
        chain.push(Box::new(IpStrategy {
            lookup: gateways.ip.clone(),
        }));
    }
    chain
}

/// Resolves the reference location for a proximity search.
pub async fn resolve_reference_location(
    gateways: &LocationGateways,
    options: LocateOptions,
) -> Result<ResolvedLocation> {
    let chain = location_chain(gateways, options);
    let resolved = usecases::resolve_location(&chain).await?;
    debug!(
        "Reference location {} resolved via {}",
        resolved.pos, resolved.source
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;
    use std::time::Duration;

    fn gateways() -> LocationGateways {
        LocationGateways {
            device: Arc::new(DummyDevice::fix(10.0, 20.0)),
            ip: Arc::new(DummyIpLookup::fix(1.0, 2.0, "Niterói")),
            geocoder: Arc::new(DummyGeocoder::fix(-7.1195, -34.845, "Centro, João Pessoa")),
        }
    }

    #[tokio::test]
    async fn manual_address_bypasses_the_device() {
        let options = LocateOptions {
            address: Some("Rua Duque de Caxias, 320".into()),
            ..Default::default()
        };
        let resolved = resolve_reference_location(&gateways(), options)
            .await
            .unwrap();
        assert_eq!(LocationSource::Geocode, resolved.source);
        assert_eq!(Some("Centro, João Pessoa"), resolved.city.as_deref());
    }

    #[tokio::test]
    async fn device_position_wins_when_available() {
        let options = LocateOptions {
            ip_fallback: true,
            ..Default::default()
        };
        let resolved = resolve_reference_location(&gateways(), options)
            .await
            .unwrap();
        assert_eq!(LocationSource::Gps, resolved.source);
        assert_eq!(10.0, resolved.pos.lat().to_deg());
    }

    #[tokio::test]
    async fn falls_back_to_the_ip_lookup() {
        let mut gateways = gateways();
        gateways.device = Arc::new(DummyDevice::denied());
        let options = LocateOptions {
            ip_fallback: true,
            ..Default::default()
        };
        let resolved = resolve_reference_location(&gateways, options)
            .await
            .unwrap();
        assert_eq!(LocationSource::IpLookup, resolved.source);
        assert_eq!(Some("Niterói"), resolved.city.as_deref());
    }

    #[tokio::test]
    async fn no_fallback_without_consent() {
        let mut gateways = gateways();
        gateways.device = Arc::new(DummyDevice::denied());
        let options = LocateOptions {
            ip_fallback: false,
            ..Default::default()
        };
        let err = resolve_reference_location(&gateways, options)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Business(crate::error::BError::Resolve(ResolveError::Gps(
                PositionError::PermissionDenied
            )))
        ));
    }

    #[tokio::test]
    async fn hanging_device_times_out() {
        let mut gateways = gateways();
        gateways.device = Arc::new(DummyDevice::hanging());
        let options = LocateOptions {
            request: PositionRequest {
                timeout: Duration::from_millis(10),
                ..Default::default()
            },
            ip_fallback: false,
            address: None,
        };
        let err = resolve_reference_location(&gateways, options)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Business(crate::error::BError::Resolve(ResolveError::Gps(
                PositionError::Timeout
            )))
        ));
    }
}
