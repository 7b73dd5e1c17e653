//! Delete Car Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use fleet_app::auth::{Action, ResourceKind};

use crate::{cars::get::CarResponse, errors::into_status_error, extensions::*, state::State};

/// Delete Car Handler
///
/// Marks the car inactive; its license plate may then be registered again.
#[endpoint(
    tags("cars"),
    summary = "Delete Car",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Car deactivated"),
        (status_code = StatusCode::NOT_FOUND, description = "Car not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CarResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Cars, Action::Delete)?;

    let car = state
        .app
        .cars
        .remove_car(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(car.into()))
}
