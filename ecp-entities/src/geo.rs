use itertools::Itertools;
use thiserror::Error;

const DEG_INVALID: f64 = f64::NAN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Coordinate degrees out of range")]
pub struct CoordRangeError;

/// Geographical latitude in degrees, positive towards north.
///
/// The default value is invalid and `to_deg()`/`to_rad()` of an
/// invalid coordinate are NaN.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const INVALID: Self = Self(DEG_INVALID);

    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        let res = Self(deg);
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Result<Self, CoordRangeError> {
        let deg = deg.into();
        if deg >= Self::DEG_MIN && deg <= Self::DEG_MAX {
            Ok(Self::from_deg(deg))
        } else {
            Err(CoordRangeError)
        }
    }
}

impl Default for LatCoord {
    fn default() -> Self {
        let res = Self::INVALID;
        debug_assert!(!res.is_valid());
        res
    }
}

impl std::fmt::Display for LatCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in degrees, positive towards east.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const INVALID: Self = Self(DEG_INVALID);

    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        let res = Self(deg);
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Result<Self, CoordRangeError> {
        let deg = deg.into();
        if deg >= Self::DEG_MIN && deg <= Self::DEG_MAX {
            Ok(Self::from_deg(deg))
        } else {
            Err(CoordRangeError)
        }
    }
}

impl Default for LngCoord {
    fn default() -> Self {
        let res = Self::INVALID;
        debug_assert!(!res.is_valid());
        res
    }
}

impl std::fmt::Display for LngCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location on a (flat) map.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

#[derive(Debug, Error)]
pub enum MapPointParseError {
    #[error("Invalid latitude: {0}")]
    Lat(String),
    #[error("Invalid longitude: {0}")]
    Lng(String),
    #[error("Failed to parse map point: {0}")]
    Format(String),
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, CoordRangeError> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Ok(lat), Ok(lng)) => Ok(Self::new(lat, lng)),
            _ => Err(CoordRangeError),
        }
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, MapPointParseError> {
        let lat_deg: f64 = lat_deg_str
            .trim()
            .parse()
            .map_err(|_| MapPointParseError::Lat(lat_deg_str.into()))?;
        let lng_deg: f64 = lng_deg_str
            .trim()
            .parse()
            .map_err(|_| MapPointParseError::Lng(lng_deg_str.into()))?;
        let lat = LatCoord::try_from_deg(lat_deg)
            .map_err(|_| MapPointParseError::Lat(lat_deg_str.into()))?;
        let lng = LngCoord::try_from_deg(lng_deg)
            .map_err(|_| MapPointParseError::Lng(lng_deg_str.into()))?;
        debug_assert!(lat.is_valid());
        debug_assert!(lng.is_valid());
        Ok(MapPoint::new(lat, lng))
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl std::str::FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(MapPointParseError::Format(s.into()))
        }
    }
}

/// A distance on the surface of the earth, stored in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn from_km(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub fn to_km(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using the haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_sin_half = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_sin_half = ((lng2_rad - lng1_rad) / 2.0).sin();

        // Rounding may push `a` marginally above 1 for antipodal points.
        let a = (dlat_sin_half * dlat_sin_half
            + lat1_rad.cos() * lat2_rad.cos() * dlng_sin_half * dlng_sin_half)
            .min(1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Some(Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * c))
    }
}
