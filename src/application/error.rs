// src/application/error.rs
use crate::domain::{errors::DomainError, hierarchy::Unresolved};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    UnresolvedPath(Unresolved),

    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Unavailable(msg) => Self::Unavailable(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}

impl From<Unresolved> for ApplicationError {
    fn from(missing: Unresolved) -> Self {
        Self::UnresolvedPath(missing)
    }
}
