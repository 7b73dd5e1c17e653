//! Car Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod options;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use fleet_app::domain::cars::records::{CarRecord, CarStatus, CarUuid};

    pub(super) fn make_car(uuid: CarUuid, license_plate: &str) -> CarRecord {
        CarRecord {
            uuid,
            license_plate: license_plate.to_string(),
            vin: None,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2022,
            mileage_km: 12_000,
            status: CarStatus::Available,
            rental_company_uuid: None,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
