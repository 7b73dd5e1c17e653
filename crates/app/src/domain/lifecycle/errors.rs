//! Resource lifecycle errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{domain::lifecycle::resource::Resource, validation::ValidationErrors};

#[derive(Debug, Error)]
pub enum ResourceError {
    /// An active record already holds the requested natural key.
    #[error("{resource} with this {key} already exists")]
    Conflict {
        resource: &'static str,
        key: &'static str,
    },

    /// No record exists with the given uuid.
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// The input failed validation.
    #[error("invalid {resource}: {}", crate::validation::summary(.errors))]
    Invalid {
        resource: &'static str,
        errors: ValidationErrors,
    },

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl ResourceError {
    #[must_use]
    pub fn conflict<R: Resource>() -> Self {
        Self::Conflict {
            resource: R::NAME,
            key: R::KEY_FIELD.unwrap_or("key"),
        }
    }

    #[must_use]
    pub fn not_found<R: Resource>() -> Self {
        Self::NotFound { resource: R::NAME }
    }

    #[must_use]
    pub fn invalid<R: Resource>(errors: ValidationErrors) -> Self {
        Self::Invalid {
            resource: R::NAME,
            errors,
        }
    }

    /// Classify a storage error raised while working on `R`.
    ///
    /// A unique violation means a concurrent writer claimed the natural key
    /// between our check and our write, which is the same conflict the check
    /// reports.
    #[must_use]
    pub fn storage<R: Resource>(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::not_found::<R>();
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::conflict::<R>(),
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

impl From<Error> for ResourceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
