//! Rental Company Records

use jiff::Timestamp;

use crate::{
    domain::{
        lifecycle::{Resource, ResourceOption},
        rental_companies::data::{NewRentalCompany, RentalCompanyUpdate},
    },
    uuids::TypedUuid,
};

/// Rental Company UUID
pub type RentalCompanyUuid = TypedUuid<RentalCompanyRecord>;

/// Rental company dropdown option.
pub type RentalCompanyOption = ResourceOption<RentalCompanyRecord>;

/// Rental Company Record
#[derive(Debug, Clone, PartialEq)]
pub struct RentalCompanyRecord {
    pub uuid: RentalCompanyUuid,
    pub name: String,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for RentalCompanyRecord {
    const NAME: &'static str = "rental company";
    const KEY_FIELD: Option<&'static str> = Some("name");

    type New = NewRentalCompany;
    type Patch = RentalCompanyUpdate;

    fn uuid(&self) -> RentalCompanyUuid {
        self.uuid
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn new_key(new: &NewRentalCompany) -> Option<&str> {
        Some(&new.name)
    }

    fn patch_key(patch: &RentalCompanyUpdate) -> Option<&str> {
        patch.name.as_deref()
    }

    fn patch_activation(patch: &RentalCompanyUpdate) -> Option<bool> {
        patch.is_active
    }

    fn deactivation() -> RentalCompanyUpdate {
        RentalCompanyUpdate {
            is_active: Some(false),
            ..RentalCompanyUpdate::default()
        }
    }
}
