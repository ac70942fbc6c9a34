use std::str::FromStr;

use serde::Deserialize;

use ecp_core::entities::*;

/// One record of the store file, as exported by the backend admin.
#[derive(Debug, Deserialize)]
pub struct PointRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub address: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl PointRecord {
    /// Maps the stored record onto the domain type.
    ///
    /// `None` if the stored kind is unknown. Out-of-range coordinates
    /// degrade to the no-geodata state, like the `0,0` placeholder the
    /// exporter writes when it could not geocode the address.
    pub fn into_point(self) -> Option<CollectionPoint> {
        let Self {
            id,
            name,
            kind,
            address,
            lat,
            lon,
        } = self;
        let kind = WasteKind::from_str(&kind)
            .ok()
            .or_else(|| WasteKind::from_legacy_id(&kind))?;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lon).unwrap_or_default();
        Some(CollectionPoint {
            id: id.into(),
            label: name,
            kind,
            address,
            pos,
        })
    }
}
