use crate::geo::MapPoint;

/// How a reference location was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    Gps,
    IpLookup,
    Geocode,
}

impl LocationSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gps => "gps",
            Self::IpLookup => "ip-lookup",
            Self::Geocode => "geocode",
        }
    }
}

impl std::fmt::Display for LocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A reference location together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub pos: MapPoint,
    pub source: LocationSource,
    pub city: Option<String>,
}
