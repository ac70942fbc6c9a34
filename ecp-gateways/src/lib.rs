mod geocode;
mod ipapi;
mod position;

pub use self::{geocode::*, ipapi::*, position::*};
