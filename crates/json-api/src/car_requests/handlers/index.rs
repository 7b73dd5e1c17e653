//! Car Request Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use fleet_app::auth::{Action, ResourceKind};

use crate::{
    car_requests::get::CarRequestResponse, errors::into_status_error, extensions::*, state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CarRequestsResponse {
    /// Car requests, oldest first
    pub car_requests: Vec<CarRequestResponse>,
}

/// Car Request Index Handler
#[endpoint(
    tags("car-requests"),
    summary = "List Car Requests",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    include_inactive: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<CarRequestsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::CarRequests, Action::Read)?;

    let requests = state
        .app
        .car_requests
        .list_car_requests(include_inactive.into_inner().unwrap_or(false))
        .await
        .map_err(into_status_error)?;

    Ok(Json(CarRequestsResponse {
        car_requests: requests.into_iter().map(Into::into).collect(),
    }))
}
