//! Maintenance Request Data

use validator::Validate;

use crate::{
    domain::{
        cars::records::CarUuid,
        maintenance_requests::records::{MaintenancePriority, MaintenanceStatus},
        users::records::UserUuid,
    },
    validation::not_blank,
};

/// New Maintenance Request Data
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewMaintenanceRequest {
    pub car_uuid: CarUuid,
    pub requested_by: UserUuid,

    #[validate(
        length(max = 2000, message = "must be at most 2000 characters"),
        custom(function = "not_blank")
    )]
    pub description: String,

    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub is_active: bool,
}

/// Maintenance Request Update Data
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct MaintenanceRequestUpdate {
    #[validate(
        length(max = 2000, message = "must be at most 2000 characters"),
        custom(function = "not_blank")
    )]
    pub description: Option<String>,

    pub priority: Option<MaintenancePriority>,
    pub status: Option<MaintenanceStatus>,
    pub is_active: Option<bool>,
}
