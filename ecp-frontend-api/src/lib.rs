use serde::de::DeserializeOwned;
use thiserror::Error;

mod public;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    /// The session cookie is missing or expired.
    #[error("Authentication required")]
    Unauthorized,

    #[error("{0:?}")]
    Api(#[from] ecp_boundary::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: reqwest::Response) -> Result<T>
where
    T: DeserializeOwned,
{
    if response.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err(Error::Unauthorized);
    }
    // ensure we've got 2xx status
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(response.json::<ecp_boundary::Error>().await?.into())
    }
}
