//! Maintenance Request Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use fleet_app::domain::{
        cars::records::CarUuid,
        maintenance_requests::records::{
            MaintenancePriority, MaintenanceRequestRecord, MaintenanceRequestUuid,
            MaintenanceStatus,
        },
    };

    use crate::test_helpers::TEST_USER_UUID;

    pub(super) fn make_maintenance_request(
        uuid: MaintenanceRequestUuid,
        car_uuid: CarUuid,
    ) -> MaintenanceRequestRecord {
        MaintenanceRequestRecord {
            uuid,
            car_uuid,
            requested_by: TEST_USER_UUID,
            description: "Grinding noise when braking".to_string(),
            priority: MaintenancePriority::Medium,
            status: MaintenanceStatus::Pending,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
