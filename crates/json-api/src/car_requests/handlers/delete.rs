//! Delete Car Request Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use fleet_app::auth::{Action, ResourceKind};

use crate::{
    car_requests::get::CarRequestResponse, errors::into_status_error, extensions::*, state::State,
};

/// Delete Car Request Handler
#[endpoint(
    tags("car-requests"),
    summary = "Delete Car Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Car request deactivated"),
        (status_code = StatusCode::NOT_FOUND, description = "Car request not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CarRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::CarRequests, Action::Delete)?;

    let request = state
        .app
        .car_requests
        .remove_car_request(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(request.into()))
}
