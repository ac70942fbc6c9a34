#[macro_use]
extern crate log;

mod locate;
mod nearby;

pub mod prelude {
    pub use super::{locate::*, nearby::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ecp_core::{
    entities::*,
    gateways::{
        geocode::{GeoCodingGateway, GeocodedAddress},
        ip_lookup::{IpLocation, IpLookupGateway},
        position::{DevicePositionGateway, PositionError, PositionRequest},
        present::PresentationGateway,
    },
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;
