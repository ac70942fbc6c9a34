use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result as Fallible};

use ecp_core::{entities::*, repositories as repo};

mod models;

use models::PointRecord;

/// Read-only view of the collection-point JSON file that the backend
/// admin maintains.
#[derive(Debug, Clone)]
pub struct JsonFileRepo {
    points: Vec<CollectionPoint>,
}

impl JsonFileRepo {
    pub fn load(path: &Path) -> Fallible<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open point store {}", path.display()))?;
        let records: Vec<PointRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Malformed point store {}", path.display()))?;
        log::info!(
            "Loaded {} collection point(s) from {}",
            records.len(),
            path.display()
        );
        Ok(Self::from_records(records))
    }

    fn from_records(records: Vec<PointRecord>) -> Self {
        let points = records
            .into_iter()
            .filter_map(|record| {
                let id = record.id.clone();
                let kind = record.kind.clone();
                let point = record.into_point();
                if point.is_none() {
                    log::warn!("Skipping point {id} with unknown waste kind '{kind}'");
                }
                point
            })
            .collect();
        Self { points }
    }
}

impl repo::CollectionPointRepo for JsonFileRepo {
    fn all_collection_points(&self) -> Result<Vec<CollectionPoint>, repo::Error> {
        Ok(self.points.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecp_core::repositories::CollectionPointRepo;

    const STORE: &str = r#"[
        {
            "id": "5df31a4e-19f1-4a4e-8b02-1d2c4e9c61b0",
            "name": "EcoPonto Centro",
            "type": "vidro",
            "address": "Rua Duque de Caxias, 320 - Centro",
            "lat": -7.1195,
            "lon": -34.8450
        },
        {
            "id": "0a6f2c1d-9a1e-4a57-94ef-52cf8f2a94d2",
            "name": "EcoPonto Manaíra",
            "type": "cooking-oil",
            "address": "Av. Gov. Flávio Ribeiro Coutinho, 805 - Manaíra",
            "lat": -7.1034,
            "lon": -34.8260
        },
        {
            "id": "e4f7b7cb-61a4-4d7e-8f2f-4a9d7c5b3a10",
            "name": "EcoPonto Valentina",
            "type": "pilhas",
            "lat": 0.0,
            "lon": 0.0
        },
        {
            "id": "b2c8d9e0-f1a2-4b3c-8d4e-5f6a7b8c9d0e",
            "name": "Depósito Isopor",
            "type": "isopor",
            "lat": -7.12,
            "lon": -34.84
        }
    ]"#;

    fn repo() -> JsonFileRepo {
        let records: Vec<PointRecord> = serde_json::from_str(STORE).unwrap();
        JsonFileRepo::from_records(records)
    }

    #[test]
    fn reads_legacy_and_current_kind_ids() {
        let points = repo().all_collection_points().unwrap();
        assert_eq!(3, points.len());
        assert_eq!(WasteKind::Glass, points[0].kind);
        assert_eq!(WasteKind::CookingOil, points[1].kind);
        assert_eq!(WasteKind::Batteries, points[2].kind);
        assert_eq!("EcoPonto Centro", points[0].label);
        assert_eq!(
            Some("Rua Duque de Caxias, 320 - Centro"),
            points[0].address.as_deref()
        );
        // A record without an address is still usable.
        assert!(points[2].address.is_none());
    }

    #[test]
    fn zero_placeholder_has_no_geodata() {
        let points = repo().all_collection_points().unwrap();
        assert!(points[0].has_geodata());
        assert!(!points[2].has_geodata());
    }

    #[test]
    fn out_of_range_coordinates_have_no_geodata() {
        let record: PointRecord = serde_json::from_str(
            r#"{
                "id": "8d0e4a2b-1c3d-4e5f-9a8b-7c6d5e4f3a2b",
                "name": "Torto",
                "type": "papel",
                "lat": 123.0,
                "lon": -34.84
            }"#,
        )
        .unwrap();
        let point = record.into_point().unwrap();
        assert!(!point.has_geodata());
    }

    #[test]
    fn filters_by_kind_on_top_of_the_store() {
        let glass = repo().collection_points_by_kind(WasteKind::Glass).unwrap();
        assert_eq!(1, glass.len());
        assert_eq!(WasteKind::Glass, glass[0].kind);
    }
}
