//! Test Helpers

use jiff::{Timestamp, ToSpan};

use crate::domain::{
    car_requests::{data::NewCarRequest, records::CarRequestStatus},
    cars::{
        data::NewCar,
        records::{CarStatus, CarUuid},
    },
    maintenance_requests::{
        data::NewMaintenanceRequest,
        records::{MaintenancePriority, MaintenanceStatus},
    },
    parts::data::NewPart,
    rental_companies::data::NewRentalCompany,
    users::{
        data::NewUser,
        records::{Department, Role, UserUuid},
    },
};

pub(crate) fn new_rental_company(name: &str) -> NewRentalCompany {
    NewRentalCompany {
        name: name.to_string(),
        contact_email: None,
        phone: None,
        is_active: true,
    }
}

pub(crate) fn new_car(license_plate: &str) -> NewCar {
    NewCar {
        license_plate: license_plate.to_string(),
        vin: None,
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2022,
        mileage_km: 0,
        status: CarStatus::Available,
        rental_company_uuid: None,
        is_active: true,
    }
}

pub(crate) fn new_part(part_number: &str) -> NewPart {
    NewPart {
        part_number: part_number.to_string(),
        name: "Brake pad".to_string(),
        quantity: 10,
        unit_price: 1_999,
        is_active: true,
    }
}

pub(crate) fn new_user(email: &str, token_hash: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: "Test User".to_string(),
        role: Role::Driver,
        department: Department::Operations,
        token_hash: token_hash.to_string(),
        is_active: true,
    }
}

pub(crate) fn new_maintenance_request(car: CarUuid, user: UserUuid) -> NewMaintenanceRequest {
    NewMaintenanceRequest {
        car_uuid: car,
        requested_by: user,
        description: "Brakes squeal at low speed".to_string(),
        priority: MaintenancePriority::Medium,
        status: MaintenanceStatus::Pending,
        is_active: true,
    }
}

pub(crate) fn new_car_request(requester: UserUuid) -> NewCarRequest {
    let starts_at = Timestamp::now();

    NewCarRequest {
        requester_uuid: requester,
        car_uuid: None,
        purpose: "Client visit".to_string(),
        destination: Some("Manchester".to_string()),
        starts_at,
        ends_at: starts_at + 4.hours(),
        status: CarRequestStatus::Pending,
        is_active: true,
    }
}
