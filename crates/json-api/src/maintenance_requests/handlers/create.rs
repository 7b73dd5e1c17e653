//! Create Maintenance Request Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, Principal, ResourceKind},
    domain::maintenance_requests::{
        data::NewMaintenanceRequest,
        records::{MaintenancePriority, MaintenanceStatus},
    },
};

use crate::{
    errors::into_status_error, extensions::*,
    maintenance_requests::get::MaintenanceRequestResponse, state::State,
};

/// Create Maintenance Request Request
///
/// The requester is always the authenticated user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateMaintenanceRequestRequest {
    pub car_uuid: Uuid,
    pub description: String,
    /// Defaults to `medium`
    #[salvo(schema(value_type = Option<String>))]
    pub priority: Option<MaintenancePriority>,
    /// Defaults to `pending`
    #[salvo(schema(value_type = Option<String>))]
    pub status: Option<MaintenanceStatus>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
}

impl CreateMaintenanceRequestRequest {
    fn into_new(self, requester: &Principal) -> NewMaintenanceRequest {
        NewMaintenanceRequest {
            car_uuid: self.car_uuid.into(),
            requested_by: requester.uuid,
            description: self.description,
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

/// Create Maintenance Request Handler
#[endpoint(
    tags("maintenance-requests"),
    summary = "Create Maintenance Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Maintenance request filed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown car"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateMaintenanceRequestRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MaintenanceRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.authorize_or_403(ResourceKind::MaintenanceRequests, Action::Create)?;

    let request = state
        .app
        .maintenance_requests
        .create_maintenance_request(json.into_inner().into_new(&principal))
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/maintenance-requests/{}", request.uuid),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(request.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use fleet_app::domain::{
        cars::records::CarUuid,
        lifecycle::ResourceError,
        maintenance_requests::{MockMaintenanceRequestsService, records::MaintenanceRequestUuid},
    };

    use crate::test_helpers::{TEST_USER_UUID, driver, maintenance_requests_service_as};

    use super::{super::tests::make_maintenance_request, *};

    fn route() -> Router {
        Router::with_path("maintenance-requests").post(handler)
    }

    #[tokio::test]
    async fn test_drivers_file_requests_as_themselves() -> TestResult {
        let uuid = MaintenanceRequestUuid::new();
        let car_uuid = CarUuid::new();
        let request = make_maintenance_request(uuid, car_uuid);

        let mut repo = MockMaintenanceRequestsService::new();

        repo.expect_create_maintenance_request()
            .once()
            .withf(move |new| {
                *new == NewMaintenanceRequest {
                    car_uuid,
                    requested_by: TEST_USER_UUID,
                    description: "Grinding noise when braking".to_string(),
                    priority: MaintenancePriority::Medium,
                    status: MaintenanceStatus::Pending,
                    is_active: true,
                }
            })
            .return_once(move |_| Ok(request));

        let mut res = TestClient::post("http://example.com/maintenance-requests")
            .json(&json!({
                "car_uuid": car_uuid.into_uuid(),
                "description": "Grinding noise when braking"
            }))
            .send(&maintenance_requests_service_as(driver(), repo, route()))
            .await;

        let body: MaintenanceRequestResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/maintenance-requests/{uuid}").as_str()));
        assert_eq!(body.requested_by, TEST_USER_UUID.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_car_returns_400() -> TestResult {
        let mut repo = MockMaintenanceRequestsService::new();

        repo.expect_create_maintenance_request()
            .once()
            .return_once(|_| Err(ResourceError::InvalidReference));

        let res = TestClient::post("http://example.com/maintenance-requests")
            .json(&json!({
                "car_uuid": Uuid::now_v7(),
                "description": "Flat tyre",
                "priority": "high"
            }))
            .send(&maintenance_requests_service_as(driver(), repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
