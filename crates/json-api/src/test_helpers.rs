//! Test helpers.

use std::sync::Arc;

use fleet_app::{
    auth::{MockAuthService, Principal},
    context::AppContext,
    domain::{
        car_requests::MockCarRequestsService,
        cars::MockCarsService,
        maintenance_requests::MockMaintenanceRequestsService,
        parts::MockPartsService,
        rental_companies::MockRentalCompaniesService,
        users::{
            MockUsersService,
            records::{Department, Role, UserUuid},
        },
    },
};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::state::State;

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) fn principal(role: Role, department: Department) -> Principal {
    Principal {
        uuid: TEST_USER_UUID,
        role,
        department,
    }
}

pub(crate) fn admin() -> Principal {
    principal(Role::Admin, Department::Administration)
}

pub(crate) fn driver() -> Principal {
    principal(Role::Driver, Department::Operations)
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_rental_companies_mock() -> MockRentalCompaniesService {
    let mut rental_companies = MockRentalCompaniesService::new();

    rental_companies.expect_list_rental_companies().never();
    rental_companies.expect_get_rental_company().never();
    rental_companies.expect_create_rental_company().never();
    rental_companies.expect_update_rental_company().never();
    rental_companies.expect_remove_rental_company().never();
    rental_companies.expect_list_rental_company_options().never();

    rental_companies
}

fn strict_cars_mock() -> MockCarsService {
    let mut cars = MockCarsService::new();

    cars.expect_list_cars().never();
    cars.expect_get_car().never();
    cars.expect_create_car().never();
    cars.expect_update_car().never();
    cars.expect_remove_car().never();
    cars.expect_list_car_options().never();

    cars
}

fn strict_parts_mock() -> MockPartsService {
    let mut parts = MockPartsService::new();

    parts.expect_list_parts().never();
    parts.expect_get_part().never();
    parts.expect_create_part().never();
    parts.expect_update_part().never();
    parts.expect_remove_part().never();
    parts.expect_list_part_options().never();

    parts
}

fn strict_maintenance_requests_mock() -> MockMaintenanceRequestsService {
    let mut requests = MockMaintenanceRequestsService::new();

    requests.expect_list_maintenance_requests().never();
    requests.expect_get_maintenance_request().never();
    requests.expect_create_maintenance_request().never();
    requests.expect_update_maintenance_request().never();
    requests.expect_remove_maintenance_request().never();

    requests
}

fn strict_car_requests_mock() -> MockCarRequestsService {
    let mut requests = MockCarRequestsService::new();

    requests.expect_list_car_requests().never();
    requests.expect_get_car_request().never();
    requests.expect_create_car_request().never();
    requests.expect_update_car_request().never();
    requests.expect_remove_car_request().never();

    requests
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_list_users().never();
    users.expect_get_user().never();
    users.expect_create_user().never();
    users.expect_update_user().never();
    users.expect_remove_user().never();
    users.expect_list_user_options().never();
    users.expect_find_by_token_hash().never();

    users
}

/// An app context whose services fail the test on any call.
pub(crate) fn strict_app_context() -> AppContext {
    AppContext {
        rental_companies: Arc::new(strict_rental_companies_mock()),
        cars: Arc::new(strict_cars_mock()),
        parts: Arc::new(strict_parts_mock()),
        maintenance_requests: Arc::new(strict_maintenance_requests_mock()),
        car_requests: Arc::new(strict_car_requests_mock()),
        users: Arc::new(strict_users_mock()),
        auth: Arc::new(strict_auth_mock()),
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    let mut app = strict_app_context();

    app.auth = Arc::new(auth);

    State::from_app_context(app)
}

/// Serve `route` as `principal`, bypassing bearer token resolution.
pub(crate) fn service_as(principal: Principal, app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .hoop(inject(principal))
            .push(route),
    )
}

pub(crate) fn rental_companies_service(
    rental_companies: MockRentalCompaniesService,
    route: Router,
) -> Service {
    rental_companies_service_as(admin(), rental_companies, route)
}

pub(crate) fn rental_companies_service_as(
    principal: Principal,
    rental_companies: MockRentalCompaniesService,
    route: Router,
) -> Service {
    let mut app = strict_app_context();

    app.rental_companies = Arc::new(rental_companies);

    service_as(principal, app, route)
}

pub(crate) fn cars_service_as(principal: Principal, cars: MockCarsService, route: Router) -> Service {
    let mut app = strict_app_context();

    app.cars = Arc::new(cars);

    service_as(principal, app, route)
}

pub(crate) fn parts_service_as(
    principal: Principal,
    parts: MockPartsService,
    route: Router,
) -> Service {
    let mut app = strict_app_context();

    app.parts = Arc::new(parts);

    service_as(principal, app, route)
}

pub(crate) fn maintenance_requests_service_as(
    principal: Principal,
    requests: MockMaintenanceRequestsService,
    route: Router,
) -> Service {
    let mut app = strict_app_context();

    app.maintenance_requests = Arc::new(requests);

    service_as(principal, app, route)
}

pub(crate) fn car_requests_service_as(
    principal: Principal,
    requests: MockCarRequestsService,
    route: Router,
) -> Service {
    let mut app = strict_app_context();

    app.car_requests = Arc::new(requests);

    service_as(principal, app, route)
}

pub(crate) fn users_service_as(
    principal: Principal,
    users: MockUsersService,
    route: Router,
) -> Service {
    let mut app = strict_app_context();

    app.users = Arc::new(users);

    service_as(principal, app, route)
}
