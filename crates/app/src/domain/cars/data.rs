//! Car Data

use validator::Validate;

use crate::{
    domain::{cars::records::CarStatus, rental_companies::records::RentalCompanyUuid},
    validation::not_blank,
};

/// New Car Data
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewCar {
    #[validate(
        length(max = 20, message = "must be at most 20 characters"),
        custom(function = "not_blank")
    )]
    pub license_plate: String,

    #[validate(length(equal = 17, message = "must be exactly 17 characters"))]
    pub vin: Option<String>,

    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub make: String,

    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub model: String,

    #[validate(range(min = 1900, max = 2100, message = "must be between 1900 and 2100"))]
    pub year: i32,

    #[validate(range(max = 9_223_372_036_854_775_807_u64, message = "is too large"))]
    pub mileage_km: u64,

    pub status: CarStatus,
    pub rental_company_uuid: Option<RentalCompanyUuid>,
    pub is_active: bool,
}

/// Car Update Data
///
/// `Some(None)` clears `vin` or `rental_company_uuid`, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CarUpdate {
    #[validate(
        length(max = 20, message = "must be at most 20 characters"),
        custom(function = "not_blank")
    )]
    pub license_plate: Option<String>,

    #[validate(length(equal = 17, message = "must be exactly 17 characters"))]
    pub vin: Option<Option<String>>,

    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub make: Option<String>,

    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100, message = "must be between 1900 and 2100"))]
    pub year: Option<i32>,

    #[validate(range(max = 9_223_372_036_854_775_807_u64, message = "is too large"))]
    pub mileage_km: Option<u64>,

    pub status: Option<CarStatus>,
    pub rental_company_uuid: Option<Option<RentalCompanyUuid>>,
    pub is_active: Option<bool>,
}
