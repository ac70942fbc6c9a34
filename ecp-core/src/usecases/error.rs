use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The search radius is invalid")]
    Radius,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
