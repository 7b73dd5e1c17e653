//! Rental Company Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod options;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use fleet_app::domain::rental_companies::records::{RentalCompanyRecord, RentalCompanyUuid};

    pub(super) fn make_rental_company(uuid: RentalCompanyUuid, name: &str) -> RentalCompanyRecord {
        RentalCompanyRecord {
            uuid,
            name: name.to_string(),
            contact_email: Some("bookings@hertz.example".to_string()),
            phone: None,
            is_active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
