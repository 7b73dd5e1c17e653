//! Create Part Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::parts::data::NewPart,
};

use crate::{errors::into_status_error, extensions::*, parts::get::PartResponse, state::State};

/// Create Part Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePartRequest {
    pub part_number: String,
    pub name: String,
    /// Defaults to 0
    pub quantity: Option<u32>,
    /// Price per unit in pence/cents
    pub unit_price: u64,
    /// Defaults to `true`
    pub is_active: Option<bool>,
}

impl From<CreatePartRequest> for NewPart {
    fn from(request: CreatePartRequest) -> Self {
        NewPart {
            part_number: request.part_number,
            name: request.name,
            quantity: request.quantity.unwrap_or_default(),
            unit_price: request.unit_price,
            is_active: request.is_active.unwrap_or(true),
        }
    }
}

/// Create Part Handler
#[endpoint(
    tags("parts"),
    summary = "Create Part",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Part created"),
        (status_code = StatusCode::CONFLICT, description = "An active part already has this part number"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Parts, Action::Create)?;

    let part = state
        .app
        .parts
        .create_part(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/parts/{}", part.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(part.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use fleet_app::domain::{
        lifecycle::ResourceError,
        parts::{MockPartsService, records::PartUuid},
        users::records::{Department, Role},
    };

    use crate::test_helpers::{parts_service_as, principal};

    use super::{super::tests::make_part, *};

    fn route() -> Router {
        Router::with_path("parts").post(handler)
    }

    fn brake_pads() -> serde_json::Value {
        json!({ "part_number": "BP-100", "name": "Brake pad set", "quantity": 8, "unit_price": 4599 })
    }

    #[tokio::test]
    async fn test_maintenance_mechanics_can_create_parts() -> TestResult {
        let uuid = PartUuid::new();
        let part = make_part(uuid, "BP-100");

        let mut repo = MockPartsService::new();

        repo.expect_create_part()
            .once()
            .withf(|new| {
                *new == NewPart {
                    part_number: "BP-100".to_string(),
                    name: "Brake pad set".to_string(),
                    quantity: 8,
                    unit_price: 4_599,
                    is_active: true,
                }
            })
            .return_once(move |_| Ok(part));

        let mut res = TestClient::post("http://example.com/parts")
            .json(&brake_pads())
            .send(&parts_service_as(
                principal(Role::Mechanic, Department::Maintenance),
                repo,
                route(),
            ))
            .await;

        let body: PartResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/parts/{uuid}").as_str()));
        assert_eq!(body.unit_price, 4_599);

        Ok(())
    }

    #[tokio::test]
    async fn test_mechanics_outside_maintenance_are_forbidden() -> TestResult {
        let mut repo = MockPartsService::new();

        repo.expect_create_part().never();

        let res = TestClient::post("http://example.com/parts")
            .json(&brake_pads())
            .send(&parts_service_as(
                principal(Role::Mechanic, Department::Operations),
                repo,
                route(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_part_number_returns_409() -> TestResult {
        let mut repo = MockPartsService::new();

        repo.expect_create_part().once().return_once(|_| {
            Err(ResourceError::Conflict {
                resource: "part",
                key: "part_number",
            })
        });

        let res = TestClient::post("http://example.com/parts")
            .json(&brake_pads())
            .send(&parts_service_as(
                principal(Role::FleetManager, Department::Maintenance),
                repo,
                route(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
