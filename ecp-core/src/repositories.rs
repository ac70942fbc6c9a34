// Low-level storage access traits. The collection point catalog is
// read-only for this client; it is maintained elsewhere.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CollectionPointRepo {
    fn all_collection_points(&self) -> Result<Vec<CollectionPoint>>;

    fn collection_points_by_kind(&self, kind: WasteKind) -> Result<Vec<CollectionPoint>> {
        Ok(self
            .all_collection_points()?
            .into_iter()
            .filter(|point| point.kind == kind)
            .collect())
    }
}
