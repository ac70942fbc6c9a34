use async_trait::async_trait;

use ecp_core::gateways::geocode::{GeoCodingGateway, GeocodeError, GeocodedAddress};
use ecp_entities::geo::MapPoint;
use ecp_frontend_api::{Error as ApiError, PublicApi};

/// Resolves addresses through the backend geocoder endpoint.
pub struct ApiGeocode {
    api: PublicApi,
}

impl ApiGeocode {
    #[must_use]
    pub const fn new(api: PublicApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl GeoCodingGateway for ApiGeocode {
    async fn resolve_address(&self, address: &str) -> Result<GeocodedAddress, GeocodeError> {
        // Not worth a round trip.
        if address.trim().is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        let mut response = self.api.geocode(address).await.map_err(|err| match err {
            ApiError::Api(api_err) => GeocodeError::Rejected(api_err.error),
            ApiError::Fetch(_) | ApiError::Unauthorized => GeocodeError::Network(err.to_string()),
        })?;
        let display_name = response.display_name.take();
        let pos: MapPoint = response
            .try_into()
            .map_err(|err| GeocodeError::Rejected(format!("{err}")))?;
        Ok(GeocodedAddress { pos, display_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_blank_addresses_without_a_request() {
        // The URL is never contacted.
        let geocode = ApiGeocode::new(PublicApi::new("http://localhost:1".to_string()));
        for address in ["", "   ", "\t\n"] {
            let err = geocode.resolve_address(address).await.unwrap_err();
            assert!(matches!(err, GeocodeError::EmptyAddress));
        }
    }
}
