use super::*;
use ecp_entities as e;

impl TryFrom<GeocodeResponse> for e::geo::MapPoint {
    type Error = e::geo::CoordRangeError;

    fn try_from(from: GeocodeResponse) -> Result<Self, Self::Error> {
        e::geo::MapPoint::try_from_lat_lng_deg(from.lat, from.lon)
    }
}
