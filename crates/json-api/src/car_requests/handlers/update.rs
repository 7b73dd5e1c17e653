//! Update Car Request Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::car_requests::{data::CarRequestUpdate, records::CarRequestStatus},
};

use crate::{
    car_requests::get::CarRequestResponse, errors::into_status_error, extensions::*, state::State,
};

/// Update Car Request Request
///
/// `null` unassigns the car or clears the destination.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCarRequestRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[salvo(schema(value_type = Option<Uuid>))]
    pub car_uuid: Option<Option<Uuid>>,
    pub purpose: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[salvo(schema(value_type = Option<String>))]
    pub destination: Option<Option<String>>,
    #[salvo(schema(value_type = Option<String>))]
    pub starts_at: Option<Timestamp>,
    #[salvo(schema(value_type = Option<String>))]
    pub ends_at: Option<Timestamp>,
    #[salvo(schema(value_type = Option<String>))]
    pub status: Option<CarRequestStatus>,
    pub is_active: Option<bool>,
}

impl From<UpdateCarRequestRequest> for CarRequestUpdate {
    fn from(request: UpdateCarRequestRequest) -> Self {
        CarRequestUpdate {
            car_uuid: request.car_uuid.map(|car| car.map(Into::into)),
            purpose: request.purpose,
            destination: request.destination,
            starts_at: request.starts_at,
            ends_at: request.ends_at,
            status: request.status,
            is_active: request.is_active,
        }
    }
}

/// Update Car Request Handler
///
/// Assigning a car and approving or rejecting the request both go through
/// here.
#[endpoint(
    tags("car-requests"),
    summary = "Update Car Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Car request updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown car or invalid window"),
        (status_code = StatusCode::NOT_FOUND, description = "Car request not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateCarRequestRequest>,
    depot: &mut Depot,
) -> Result<Json<CarRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::CarRequests, Action::Update)?;

    let request = state
        .app
        .car_requests
        .update_car_request(uuid.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(request.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use fleet_app::domain::{
        car_requests::{MockCarRequestsService, records::CarRequestUuid},
        cars::records::CarUuid,
        lifecycle::ResourceError,
        users::records::{Department, Role},
    };

    use crate::test_helpers::{car_requests_service_as, driver, principal};

    use super::{super::tests::make_car_request, *};

    fn route() -> Router {
        Router::with_path("car-requests/{uuid}").put(handler)
    }

    #[tokio::test]
    async fn test_fleet_managers_approve_and_assign_a_car() -> TestResult {
        let uuid = CarRequestUuid::new();
        let car = CarUuid::new();

        let mut request = make_car_request(uuid);

        request.status = CarRequestStatus::Approved;
        request.car_uuid = Some(car);

        let mut repo = MockCarRequestsService::new();

        repo.expect_update_car_request()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == CarRequestUpdate {
                            car_uuid: Some(Some(car)),
                            status: Some(CarRequestStatus::Approved),
                            ..CarRequestUpdate::default()
                        }
            })
            .return_once(move |_, _| Ok(request));

        let mut res = TestClient::put(format!("http://example.com/car-requests/{uuid}"))
            .json(&json!({ "car_uuid": car.into_uuid(), "status": "approved" }))
            .send(&car_requests_service_as(
                principal(Role::FleetManager, Department::Operations),
                repo,
                route(),
            ))
            .await;

        let body: CarRequestResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, CarRequestStatus::Approved);
        assert_eq!(body.car_uuid, Some(car.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_window_rejected_by_storage_returns_400() -> TestResult {
        let mut repo = MockCarRequestsService::new();

        repo.expect_update_car_request()
            .once()
            .return_once(|_, _| Err(ResourceError::InvalidData));

        let res = TestClient::put(format!(
            "http://example.com/car-requests/{}",
            Uuid::now_v7()
        ))
        .json(&json!({ "ends_at": "2026-10-19T09:00:00Z" }))
        .send(&car_requests_service_as(
            principal(Role::Admin, Department::Administration),
            repo,
            route(),
        ))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_drivers_cannot_approve_requests() -> TestResult {
        let mut repo = MockCarRequestsService::new();

        repo.expect_update_car_request().never();

        let res = TestClient::put(format!(
            "http://example.com/car-requests/{}",
            Uuid::now_v7()
        ))
        .json(&json!({ "status": "approved" }))
        .send(&car_requests_service_as(driver(), repo, route()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
