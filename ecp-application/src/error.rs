use std::io;

use thiserror::Error;

use ecp_core::{
    repositories::Error as RepoError,
    usecases::{Error as ParameterError, ResolveError},
};

pub use ecp_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ecp_core::usecases::Error> for AppError {
    fn from(err: ecp_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
