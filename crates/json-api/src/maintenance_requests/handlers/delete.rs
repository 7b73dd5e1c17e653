//! Delete Maintenance Request Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use fleet_app::auth::{Action, ResourceKind};

use crate::{
    errors::into_status_error, extensions::*,
    maintenance_requests::get::MaintenanceRequestResponse, state::State,
};

/// Delete Maintenance Request Handler
#[endpoint(
    tags("maintenance-requests"),
    summary = "Delete Maintenance Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Maintenance request deactivated"),
        (status_code = StatusCode::NOT_FOUND, description = "Maintenance request not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MaintenanceRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::MaintenanceRequests, Action::Delete)?;

    let request = state
        .app
        .maintenance_requests
        .remove_maintenance_request(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(request.into()))
}
