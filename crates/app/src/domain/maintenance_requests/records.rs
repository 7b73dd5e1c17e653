//! Maintenance Request Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{
    domain::{
        cars::records::CarUuid,
        lifecycle::Resource,
        maintenance_requests::data::{MaintenanceRequestUpdate, NewMaintenanceRequest},
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Maintenance Request UUID
pub type MaintenanceRequestUuid = TypedUuid<MaintenanceRequestRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MaintenancePriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MaintenanceStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Maintenance Request Record
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRequestRecord {
    pub uuid: MaintenanceRequestUuid,
    pub car_uuid: CarUuid,
    pub requested_by: UserUuid,
    pub description: String,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resource for MaintenanceRequestRecord {
    const NAME: &'static str = "maintenance request";
    const KEY_FIELD: Option<&'static str> = None;

    type New = NewMaintenanceRequest;
    type Patch = MaintenanceRequestUpdate;

    fn uuid(&self) -> MaintenanceRequestUuid {
        self.uuid
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn natural_key(&self) -> Option<&str> {
        None
    }

    fn new_key(_new: &NewMaintenanceRequest) -> Option<&str> {
        None
    }

    fn patch_key(_patch: &MaintenanceRequestUpdate) -> Option<&str> {
        None
    }

    fn patch_activation(patch: &MaintenanceRequestUpdate) -> Option<bool> {
        patch.is_active
    }

    fn deactivation() -> MaintenanceRequestUpdate {
        MaintenanceRequestUpdate {
            is_active: Some(false),
            ..MaintenanceRequestUpdate::default()
        }
    }
}
