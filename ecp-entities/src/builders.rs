pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::point_builder::*;

pub mod point_builder {

    use super::*;
    use crate::{geo::*, id::*, point::*};

    #[derive(Debug)]
    pub struct CollectionPointBuild {
        point: CollectionPoint,
    }

    impl CollectionPointBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.point.id = id.into();
            self
        }
        pub fn label(mut self, label: &str) -> Self {
            self.point.label = label.into();
            self
        }
        pub fn kind(mut self, kind: WasteKind) -> Self {
            self.point.kind = kind;
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.point.address = Some(address.into());
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.point.pos = pos;
            self
        }
        pub fn lat_lng_deg(mut self, lat: f64, lng: f64) -> Self {
            self.point.pos = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn finish(self) -> CollectionPoint {
            self.point
        }
    }

    impl Builder for CollectionPoint {
        type Build = CollectionPointBuild;
        fn build() -> Self::Build {
            CollectionPointBuild {
                point: CollectionPoint {
                    id: Id::new(),
                    label: "".into(),
                    kind: WasteKind::Plastic,
                    address: None,
                    pos: MapPoint::default(),
                },
            }
        }
    }

    #[test]
    fn build_collection_point() {
        let point = CollectionPoint::build()
            .label("Ecoponto Centro")
            .kind(WasteKind::Glass)
            .lat_lng_deg(-22.9068, -43.1729)
            .finish();
        assert!(point.id.is_valid());
        assert!(point.has_geodata());
        assert_eq!(point.kind, WasteKind::Glass);
    }
}
