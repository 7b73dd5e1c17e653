//! User Data

use validator::Validate;

use crate::{
    domain::users::records::{Department, Role},
    validation::not_blank,
};

/// New User Data
///
/// Users are created by the admin CLI, which hashes the issued bearer token
/// before handing it over.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewUser {
    #[validate(
        length(max = 254, message = "must be at most 254 characters"),
        email(message = "must be a valid e-mail address")
    )]
    pub email: String,

    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    pub role: Role,
    pub department: Department,

    /// Hex-encoded SHA-256 of the bearer token.
    #[validate(length(equal = 64, message = "must be exactly 64 characters"))]
    pub token_hash: String,

    pub is_active: bool,
}

/// User Update Data
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UserUpdate {
    #[validate(
        length(max = 254, message = "must be at most 254 characters"),
        email(message = "must be a valid e-mail address")
    )]
    pub email: Option<String>,

    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    pub role: Option<Role>,
    pub department: Option<Department>,
    pub is_active: Option<bool>,
}
