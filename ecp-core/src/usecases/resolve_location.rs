use async_trait::async_trait;
use thiserror::Error;

use crate::{
    entities::*,
    gateways::{geocode::GeocodeError, ip_lookup::IpLookupError, position::PositionError},
};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Gps(#[from] PositionError),
    #[error(transparent)]
    IpLookup(#[from] IpLookupError),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error("No location strategy is available")]
    NoStrategy,
}

/// One way of obtaining the reference location.
#[async_trait]
pub trait ResolveLocation: Send + Sync {
    fn source(&self) -> LocationSource;
    async fn resolve(&self) -> Result<ResolvedLocation, ResolveError>;
}

/// Runs the given strategies in order of priority.
///
/// The first success short-circuits the chain. When every strategy
/// fails, the failure of the first and most preferred one is
/// returned; later failures are only logged. An empty chain fails
/// with `NoStrategy`.
pub async fn resolve_location(
    strategies: &[Box<dyn ResolveLocation>],
) -> Result<ResolvedLocation, ResolveError> {
    let mut first_err = None;
    for strategy in strategies {
        match strategy.resolve().await {
            Ok(resolved) => {
                debug_assert!(resolved.pos.is_valid());
                log::info!("Resolved reference location via {}", resolved.source);
                return Ok(resolved);
            }
            Err(err) => {
                log::warn!(
                    "Could not resolve location via {}: {}",
                    strategy.source(),
                    err
                );
                if first_err.is_none() {
                    first_err = Some(err);
                }
            }
        }
    }
    Err(first_err.unwrap_or(ResolveError::NoStrategy))
}

#[cfg(test)]
mod tests {

    use super::*;

    struct GpsFix;

    #[async_trait]
    impl ResolveLocation for GpsFix {
        fn source(&self) -> LocationSource {
            LocationSource::Gps
        }
        async fn resolve(&self) -> Result<ResolvedLocation, ResolveError> {
            Ok(ResolvedLocation {
                pos: MapPoint::from_lat_lng_deg(10.0, 20.0),
                source: LocationSource::Gps,
                city: None,
            })
        }
    }

    struct FailingGps;

    #[async_trait]
    impl ResolveLocation for FailingGps {
        fn source(&self) -> LocationSource {
            LocationSource::Gps
        }
        async fn resolve(&self) -> Result<ResolvedLocation, ResolveError> {
            Err(PositionError::PermissionDenied.into())
        }
    }

    struct IpFix;

    #[async_trait]
    impl ResolveLocation for IpFix {
        fn source(&self) -> LocationSource {
            LocationSource::IpLookup
        }
        async fn resolve(&self) -> Result<ResolvedLocation, ResolveError> {
            Ok(ResolvedLocation {
                pos: MapPoint::from_lat_lng_deg(1.0, 2.0),
                source: LocationSource::IpLookup,
                city: Some("Niterói".into()),
            })
        }
    }

    struct FailingIp;

    #[async_trait]
    impl ResolveLocation for FailingIp {
        fn source(&self) -> LocationSource {
            LocationSource::IpLookup
        }
        async fn resolve(&self) -> Result<ResolvedLocation, ResolveError> {
            Err(IpLookupError("coordinates missing in response".into()).into())
        }
    }

    #[tokio::test]
    async fn falls_back_to_the_next_strategy() {
        let strategies: Vec<Box<dyn ResolveLocation>> =
            vec![Box::new(FailingGps), Box::new(IpFix)];
        let resolved = resolve_location(&strategies).await.unwrap();
        assert_eq!((1.0, 2.0), resolved.pos.to_lat_lng_deg());
        assert_eq!(LocationSource::IpLookup, resolved.source);
    }

    #[tokio::test]
    async fn first_success_short_circuits() {
        let strategies: Vec<Box<dyn ResolveLocation>> = vec![Box::new(GpsFix), Box::new(IpFix)];
        let resolved = resolve_location(&strategies).await.unwrap();
        assert_eq!((10.0, 20.0), resolved.pos.to_lat_lng_deg());
        assert_eq!(LocationSource::Gps, resolved.source);
    }

    #[tokio::test]
    async fn surfaces_the_first_failure() {
        let strategies: Vec<Box<dyn ResolveLocation>> =
            vec![Box::new(FailingGps), Box::new(FailingIp)];
        let err = resolve_location(&strategies).await.unwrap_err();
        assert!(matches!(
            err,
            ResolveError::Gps(PositionError::PermissionDenied)
        ));
    }

    #[tokio::test]
    async fn empty_chain() {
        let strategies: Vec<Box<dyn ResolveLocation>> = vec![];
        let err = resolve_location(&strategies).await.unwrap_err();
        assert!(matches!(err, ResolveError::NoStrategy));
    }
}
