use std::{cell::RefCell, result::Result};

use async_trait::async_trait;

use super::*;
use ecp_core::{
    gateways::{geocode::GeocodeError, ip_lookup::IpLookupError},
    repositories::Error as RepoError,
};

pub struct DummyDevice {
    answer: Option<MapPoint>,
    hang: bool,
}

impl DummyDevice {
    pub fn fix(lat_deg: f64, lng_deg: f64) -> Self {
        Self {
            answer: Some(MapPoint::from_lat_lng_deg(lat_deg, lng_deg)),
            hang: false,
        }
    }

    pub fn denied() -> Self {
        Self {
            answer: None,
            hang: false,
        }
    }

    pub fn hanging() -> Self {
        Self {
            answer: None,
            hang: true,
        }
    }
}

#[async_trait]
impl DevicePositionGateway for DummyDevice {
    async fn current_position(&self, _request: PositionRequest) -> Result<MapPoint, PositionError> {
        if self.hang {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
        }
        self.answer.ok_or(PositionError::PermissionDenied)
    }
}

pub struct DummyIpLookup {
    answer: IpLocation,
}

impl DummyIpLookup {
    pub fn fix(lat_deg: f64, lng_deg: f64, city: &str) -> Self {
        Self {
            answer: IpLocation {
                pos: MapPoint::from_lat_lng_deg(lat_deg, lng_deg),
                city: Some(city.into()),
            },
        }
    }
}

#[async_trait]
impl IpLookupGateway for DummyIpLookup {
    async fn locate_own_ip(&self) -> Result<IpLocation, IpLookupError> {
        Ok(self.answer.clone())
    }
}

pub struct DummyGeocoder {
    answer: GeocodedAddress,
}

impl DummyGeocoder {
    pub fn fix(lat_deg: f64, lng_deg: f64, display_name: &str) -> Self {
        Self {
            answer: GeocodedAddress {
                pos: MapPoint::from_lat_lng_deg(lat_deg, lng_deg),
                display_name: Some(display_name.into()),
            },
        }
    }
}

#[async_trait]
impl GeoCodingGateway for DummyGeocoder {
    async fn resolve_address(&self, address: &str) -> Result<GeocodedAddress, GeocodeError> {
        if address.trim().is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        Ok(self.answer.clone())
    }
}

pub struct DummyRepo {
    points: Vec<CollectionPoint>,
}

impl From<Vec<CollectionPoint>> for DummyRepo {
    fn from(points: Vec<CollectionPoint>) -> Self {
        Self { points }
    }
}

impl CollectionPointRepo for DummyRepo {
    fn all_collection_points(&self) -> Result<Vec<CollectionPoint>, RepoError> {
        Ok(self.points.clone())
    }
}

#[derive(Debug)]
pub enum PresentedEvent {
    Point(String),
    Kind(KindSummary),
}

#[derive(Default)]
pub struct RecordingPresenter {
    pub events: RefCell<Vec<PresentedEvent>>,
}

impl PresentationGateway for RecordingPresenter {
    fn point_filtered(&self, result: &PointFilterResult) {
        self.events
            .borrow_mut()
            .push(PresentedEvent::Point(result.point.label.clone()));
    }

    fn kind_summarized(&self, summary: &KindSummary) {
        self.events
            .borrow_mut()
            .push(PresentedEvent::Kind(*summary));
    }
}
