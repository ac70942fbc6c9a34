use async_trait::async_trait;
use serde::Deserialize;

use ecp_core::gateways::ip_lookup::{IpLocation, IpLookupError, IpLookupGateway};
use ecp_entities::geo::MapPoint;

pub const DEFAULT_IP_LOOKUP_URL: &str = "https://ipapi.co/json/";

/// Coarse geolocation of the caller's own IP address via <https://ipapi.co>.
pub struct IpApi {
    url: String,
    client: reqwest::Client,
}

impl IpApi {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

/// The fields of the service answer that matter here. The full
/// payload carries a lot more (ASN, currency, timezone).
#[derive(Debug, Deserialize)]
struct IpApiPayload {
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: Option<String>,
    // Set on over-quota and reserved-range answers.
    error: Option<bool>,
    reason: Option<String>,
}

impl IpApiPayload {
    fn into_location(self) -> Result<IpLocation, IpLookupError> {
        let Self {
            latitude,
            longitude,
            city,
            error,
            reason,
        } = self;
        if error.unwrap_or_default() {
            return Err(IpLookupError(
                reason.unwrap_or_else(|| "Lookup rejected by the service".to_string()),
            ));
        }
        let (Some(lat_deg), Some(lng_deg)) = (latitude, longitude) else {
            return Err(IpLookupError("Payload without coordinates".to_string()));
        };
        // Zeroed coordinates mean the service could not place the caller.
        if lat_deg == 0.0 && lng_deg == 0.0 {
            return Err(IpLookupError("Payload without coordinates".to_string()));
        }
        let pos = MapPoint::try_from_lat_lng_deg(lat_deg, lng_deg)
            .map_err(|err| IpLookupError(format!("{err}: {lat_deg},{lng_deg}")))?;
        Ok(IpLocation { pos, city })
    }
}

#[async_trait]
impl IpLookupGateway for IpApi {
    async fn locate_own_ip(&self) -> Result<IpLocation, IpLookupError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| IpLookupError(err.to_string()))?;
        if !response.status().is_success() {
            return Err(IpLookupError(format!(
                "Lookup service answered with status {}",
                response.status()
            )));
        }
        let payload: IpApiPayload = response
            .json()
            .await
            .map_err(|err| IpLookupError(err.to_string()))?;
        let location = payload.into_location()?;
        log::debug!(
            "Located own IP near {} ({})",
            location.pos,
            location.city.as_deref().unwrap_or("unknown city")
        );
        Ok(location)
    }
}
