mod error;
mod filter_points;
mod resolve_location;

pub use self::{error::Error, filter_points::*, resolve_location::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::entities::*;
}
