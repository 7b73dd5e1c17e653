//! Part Records

use jiff::Timestamp;

use crate::{
    domain::{
        lifecycle::{Resource, ResourceOption},
        parts::data::{NewPart, PartUpdate},
    },
    uuids::TypedUuid,
};

/// Part UUID
pub type PartUuid = TypedUuid<PartRecord>;

/// Part dropdown option, labelled by part number.
pub type PartOption = ResourceOption<PartRecord>;

/// Part Record
#[derive(Debug, Clone, PartialEq)]
pub struct PartRecord {
    pub uuid: PartUuid,
    pub part_number: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for PartRecord {
    const NAME: &'static str = "part";
    const KEY_FIELD: Option<&'static str> = Some("part_number");

    type New = NewPart;
    type Patch = PartUpdate;

    fn uuid(&self) -> PartUuid {
        self.uuid
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.part_number)
    }

    fn new_key(new: &NewPart) -> Option<&str> {
        Some(&new.part_number)
    }

    fn patch_key(patch: &PartUpdate) -> Option<&str> {
        patch.part_number.as_deref()
    }

    fn patch_activation(patch: &PartUpdate) -> Option<bool> {
        patch.is_active
    }

    fn deactivation() -> PartUpdate {
        PartUpdate {
            is_active: Some(false),
            ..PartUpdate::default()
        }
    }
}
