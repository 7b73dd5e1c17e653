//! Maintenance Request Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use fleet_app::auth::{Action, ResourceKind};

use crate::{
    errors::into_status_error, extensions::*,
    maintenance_requests::get::MaintenanceRequestResponse, state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MaintenanceRequestsResponse {
    /// Maintenance requests, oldest first
    pub maintenance_requests: Vec<MaintenanceRequestResponse>,
}

/// Maintenance Request Index Handler
#[endpoint(
    tags("maintenance-requests"),
    summary = "List Maintenance Requests",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    include_inactive: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<MaintenanceRequestsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::MaintenanceRequests, Action::Read)?;

    let requests = state
        .app
        .maintenance_requests
        .list_maintenance_requests(include_inactive.into_inner().unwrap_or(false))
        .await
        .map_err(into_status_error)?;

    Ok(Json(MaintenanceRequestsResponse {
        maintenance_requests: requests.into_iter().map(Into::into).collect(),
    }))
}
