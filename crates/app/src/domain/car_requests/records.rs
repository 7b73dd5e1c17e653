//! Car Request Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{
    domain::{
        car_requests::data::{CarRequestUpdate, NewCarRequest},
        cars::records::CarUuid,
        lifecycle::Resource,
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Car Request UUID
pub type CarRequestUuid = TypedUuid<CarRequestRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CarRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

/// Car Request Record
#[derive(Debug, Clone, PartialEq)]
pub struct CarRequestRecord {
    pub uuid: CarRequestUuid,
    pub requester_uuid: UserUuid,
    pub car_uuid: Option<CarUuid>,
    pub purpose: String,
    pub destination: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub status: CarRequestStatus,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for CarRequestRecord {
    const NAME: &'static str = "car request";
    const KEY_FIELD: Option<&'static str> = None;

    type New = NewCarRequest;
    type Patch = CarRequestUpdate;

    fn uuid(&self) -> CarRequestUuid {
        self.uuid
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn natural_key(&self) -> Option<&str> {
        None
    }

    fn new_key(_new: &NewCarRequest) -> Option<&str> {
        None
    }

    fn patch_key(_patch: &CarRequestUpdate) -> Option<&str> {
        None
    }

    fn patch_activation(patch: &CarRequestUpdate) -> Option<bool> {
        patch.is_active
    }

    fn deactivation() -> CarRequestUpdate {
        CarRequestUpdate {
            is_active: Some(false),
            ..CarRequestUpdate::default()
        }
    }
}
