//! Car Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use fleet_app::auth::{Action, ResourceKind};

use crate::{cars::get::CarResponse, errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CarsResponse {
    /// Cars ordered by license plate
    pub cars: Vec<CarResponse>,
}

/// Car Index Handler
#[endpoint(
    tags("cars"),
    summary = "List Cars",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    include_inactive: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<CarsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Cars, Action::Read)?;

    let cars = state
        .app
        .cars
        .list_cars(include_inactive.into_inner().unwrap_or(false))
        .await
        .map_err(into_status_error)?;

    Ok(Json(CarsResponse {
        cars: cars.into_iter().map(Into::into).collect(),
    }))
}
