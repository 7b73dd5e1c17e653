//! Car Request Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, ToSpan};

    use fleet_app::domain::car_requests::records::{
        CarRequestRecord, CarRequestStatus, CarRequestUuid,
    };

    use crate::test_helpers::TEST_USER_UUID;

    pub(super) const STARTS_AT: &str = "2026-10-20T09:00:00Z";

    pub(super) fn make_car_request(uuid: CarRequestUuid) -> CarRequestRecord {
        let starts_at: Timestamp = STARTS_AT.parse().unwrap_or(Timestamp::UNIX_EPOCH);

        CarRequestRecord {
            uuid,
            requester_uuid: TEST_USER_UUID,
            car_uuid: None,
            purpose: "Client visit".to_string(),
            destination: Some("Leeds".to_string()),
            starts_at,
            ends_at: starts_at + 8.hours(),
            status: CarRequestStatus::Pending,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
