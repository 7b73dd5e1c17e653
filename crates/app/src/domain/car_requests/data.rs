//! Car Request Data

use jiff::Timestamp;
use validator::{Validate, ValidationErrors};

use crate::{
    domain::{
        car_requests::records::CarRequestStatus, cars::records::CarUuid, users::records::UserUuid,
    },
    validation::{bounded_text, ordered_window},
};

const PURPOSE_MAX: u64 = 2000;
const DESTINATION_MAX: u64 = 200;

/// New Car Request Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCarRequest {
    pub requester_uuid: UserUuid,
    pub car_uuid: Option<CarUuid>,
    pub purpose: String,
    pub destination: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub status: CarRequestStatus,
    pub is_active: bool,
}

/// Car Request Update Data
///
/// `Some(None)` clears `car_uuid` or `destination`, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarRequestUpdate {
    pub car_uuid: Option<Option<CarUuid>>,
    pub purpose: Option<String>,
    pub destination: Option<Option<String>>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub status: Option<CarRequestStatus>,
    pub is_active: Option<bool>,
}

fn finish(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// The window error belongs to `ends_at`, which the derive cannot express.
impl Validate for NewCarRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(error) = bounded_text(&self.purpose, PURPOSE_MAX) {
            errors.add("purpose", error);
        }

        if let Some(destination) = &self.destination
            && let Err(error) = bounded_text(destination, DESTINATION_MAX)
        {
            errors.add("destination", error);
        }

        if let Err(error) = ordered_window(self.starts_at, self.ends_at) {
            errors.add("ends_at", error);
        }

        finish(errors)
    }
}

impl Validate for CarRequestUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(purpose) = &self.purpose
            && let Err(error) = bounded_text(purpose, PURPOSE_MAX)
        {
            errors.add("purpose", error);
        }

        if let Some(Some(destination)) = &self.destination
            && let Err(error) = bounded_text(destination, DESTINATION_MAX)
        {
            errors.add("destination", error);
        }

        // A one-sided change is checked against the stored bound by the table.
        if let (Some(starts_at), Some(ends_at)) = (self.starts_at, self.ends_at)
            && let Err(error) = ordered_window(starts_at, ends_at)
        {
            errors.add("ends_at", error);
        }

        finish(errors)
    }
}
