//! Update Maintenance Request Handler

use std::sync::Arc;

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
    domain::maintenance_requests::{
        data::MaintenanceRequestUpdate,
        records::{MaintenancePriority, MaintenanceStatus},
    },
};

use crate::{
    errors::into_status_error, extensions::*,
    maintenance_requests::get::MaintenanceRequestResponse, state::State,
};

/// Update Maintenance Request Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateMaintenanceRequestRequest {
    pub description: Option<String>,
    #[salvo(schema(value_type = Option<String>))]
    pub priority: Option<MaintenancePriority>,
    #[salvo(schema(value_type = Option<String>))]
    pub status: Option<MaintenanceStatus>,
    pub is_active: Option<bool>,
}

impl From<UpdateMaintenanceRequestRequest> for MaintenanceRequestUpdate {
    fn from(request: UpdateMaintenanceRequestRequest) -> Self {
        MaintenanceRequestUpdate {
            description: request.description,
            priority: request.priority,
            status: request.status,
            is_active: request.is_active,
        }
    }
}

/// Update Maintenance Request Handler
#[endpoint(
    tags("maintenance-requests"),
    summary = "Update Maintenance Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Maintenance request updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Maintenance request not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateMaintenanceRequestRequest>,
    depot: &mut Depot,
) -> Result<Json<MaintenanceRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::MaintenanceRequests, Action::Update)?;

    let request = state
        .app
        .maintenance_requests
        .update_maintenance_request(uuid.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(request.into()))
}
