//! Car Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{
    domain::{
        cars::data::{CarUpdate, NewCar},
        lifecycle::{Resource, ResourceOption},
        rental_companies::records::RentalCompanyUuid,
    },
    uuids::TypedUuid,
};

/// Car UUID
pub type CarUuid = TypedUuid<CarRecord>;

/// Car dropdown option, labelled by license plate.
pub type CarOption = ResourceOption<CarRecord>;

/// Operational status of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CarStatus {
    #[default]
    Available,
    InUse,
    InMaintenance,
    Retired,
}

/// Car Record
#[derive(Debug, Clone, PartialEq)]
pub struct CarRecord {
    pub uuid: CarUuid,
    pub license_plate: String,
    pub vin: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage_km: u64,
    pub status: CarStatus,
    pub rental_company_uuid: Option<RentalCompanyUuid>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for CarRecord {
    const NAME: &'static str = "car";
    const KEY_FIELD: Option<&'static str> = Some("license_plate");

    type New = NewCar;
    type Patch = CarUpdate;

    fn uuid(&self) -> CarUuid {
        self.uuid
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.license_plate)
    }

    fn new_key(new: &NewCar) -> Option<&str> {
        Some(&new.license_plate)
    }

    fn patch_key(patch: &CarUpdate) -> Option<&str> {
        patch.license_plate.as_deref()
    }

    fn patch_activation(patch: &CarUpdate) -> Option<bool> {
        patch.is_active
    }

    fn deactivation() -> CarUpdate {
        CarUpdate {
            is_active: Some(false),
            ..CarUpdate::default()
        }
    }
}
