//! Auth service errors.

use thiserror::Error;

use crate::domain::lifecycle::ResourceError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("token not found")]
    NotFound,

    #[error("user store error: {0}")]
    Users(#[from] ResourceError),
}

