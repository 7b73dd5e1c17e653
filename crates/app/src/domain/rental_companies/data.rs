//! Rental Company Data

use validator::Validate;

use crate::validation::not_blank;

/// New Rental Company Data
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewRentalCompany {
    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(
        length(max = 254, message = "must be at most 254 characters"),
        email(message = "must be a valid e-mail address")
    )]
    pub contact_email: Option<String>,

    #[validate(
        length(max = 30, message = "must be at most 30 characters"),
        custom(function = "not_blank")
    )]
    pub phone: Option<String>,

    pub is_active: bool,
}

/// Rental Company Update Data
///
/// `Some(None)` clears a contact field, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct RentalCompanyUpdate {
    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    #[validate(
        length(max = 254, message = "must be at most 254 characters"),
        email(message = "must be a valid e-mail address")
    )]
    pub contact_email: Option<Option<String>>,

    #[validate(
        length(max = 30, message = "must be at most 30 characters"),
        custom(function = "not_blank")
    )]
    pub phone: Option<Option<String>>,

    pub is_active: Option<bool>,
}
