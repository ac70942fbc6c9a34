use strum::{EnumIter, EnumString};

use crate::{geo::{Distance, MapPoint}, id::Id};

/// Kind of waste accepted at a collection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum WasteKind {
    Batteries,
    CookingOil,
    Electronics,
    Plastic,
    Glass,
    Paper,
    Metal,
}

impl WasteKind {
    pub const ALL: [Self; 7] = [
        Self::Batteries,
        Self::CookingOil,
        Self::Electronics,
        Self::Plastic,
        Self::Glass,
        Self::Paper,
        Self::Metal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Batteries => "batteries",
            Self::CookingOil => "cooking-oil",
            Self::Electronics => "electronics",
            Self::Plastic => "plastic",
            Self::Glass => "glass",
            Self::Paper => "paper",
            Self::Metal => "metal",
        }
    }

    /// Human-readable card title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Batteries => "Batteries",
            Self::CookingOil => "Cooking oil",
            Self::Electronics => "Electronics",
            Self::Plastic => "Plastic",
            Self::Glass => "Glass",
            Self::Paper => "Paper",
            Self::Metal => "Metal",
        }
    }

    /// One-line disposal advice shown on the card of this kind.
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Batteries => {
                "Take them to an authorized drop-off, never into household trash."
            }
            Self::CookingOil => "Store in a plastic bottle and hand it in at a collection point.",
            Self::Electronics => "Computers, phones and cables must be recycled separately.",
            Self::Plastic => "Rinse packaging before putting it out for selective collection.",
            Self::Glass => "Pack broken glass in cardboard boxes to prevent accidents.",
            Self::Paper => "Dry, clean paper can be recycled. Avoid crumpling it.",
            Self::Metal => "Aluminium and steel cans are fully recyclable.",
        }
    }

    /// Resolves the kind identifiers used by the upstream data exports.
    pub fn from_legacy_id(id: &str) -> Option<Self> {
        let kind = match id {
            "pilhas" => Self::Batteries,
            "oleo" => Self::CookingOil,
            "eletronico" => Self::Electronics,
            "plastico" => Self::Plastic,
            "vidro" => Self::Glass,
            "papel" => Self::Paper,
            "metal" => Self::Metal,
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for WasteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A public drop-off site that accepts one kind of waste.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPoint {
    pub id: Id,
    pub label: String,
    pub kind: WasteKind,
    pub address: Option<String>,
    pub pos: MapPoint,
}

impl CollectionPoint {
    /// Whether the point carries usable geodata.
    ///
    /// Upstream data encodes missing coordinates as exactly `0,0`.
    /// That position is treated as absent, not as a real location
    /// in the Gulf of Guinea.
    pub fn has_geodata(&self) -> bool {
        if !self.pos.is_valid() {
            return false;
        }
        let (lat_deg, lng_deg) = self.pos.to_lat_lng_deg();
        lat_deg != 0.0 || lng_deg != 0.0
    }
}

/// Result of classifying a single collection point against a
/// reference location.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFilterResult {
    pub point: CollectionPoint,
    /// Unknown if either position is missing.
    pub distance: Option<Distance>,
    pub within_radius: bool,
}

/// Per-kind tally of the points within the search radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSummary {
    pub kind: WasteKind,
    pub count: usize,
    /// The radius the tally was computed with.
    pub radius: Distance,
}
