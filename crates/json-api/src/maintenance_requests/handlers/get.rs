//! Get Maintenance Request Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::maintenance_requests::records::{
        MaintenancePriority, MaintenanceRequestRecord, MaintenanceStatus,
    },
};

use crate::{errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MaintenanceRequestResponse {
    pub uuid: Uuid,

    /// The car needing work
    pub car_uuid: Uuid,

    /// The user who filed the request
    pub requested_by: Uuid,

    pub description: String,

    /// One of `low`, `medium`, `high`, `critical`
    #[salvo(schema(value_type = String))]
    pub priority: MaintenancePriority,

    /// One of `pending`, `in_progress`, `completed`, `cancelled`
    #[salvo(schema(value_type = String))]
    pub status: MaintenanceStatus,

    pub is_active: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<MaintenanceRequestRecord> for MaintenanceRequestResponse {
    fn from(request: MaintenanceRequestRecord) -> Self {
        MaintenanceRequestResponse {
            uuid: request.uuid.into(),
            car_uuid: request.car_uuid.into(),
            requested_by: request.requested_by.into(),
            description: request.description,
            priority: request.priority,
            status: request.status,
            is_active: request.is_active,
            created_at: request.created_at.to_string(),
            updated_at: request.updated_at.to_string(),
        }
    }
}

/// Get Maintenance Request Handler
#[endpoint(
    tags("maintenance-requests"),
    summary = "Get Maintenance Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Maintenance request found"),
        (status_code = StatusCode::NOT_FOUND, description = "Maintenance request not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MaintenanceRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::MaintenanceRequests, Action::Read)?;

    let request = state
        .app
        .maintenance_requests
        .get_maintenance_request(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(request.into()))
}
