//! Car Options Handler

use std::sync::Arc;

use salvo::prelude::*;

use fleet_app::auth::{Action, ResourceKind};

use crate::{errors::into_status_error, extensions::*, options::OptionsResponse, state::State};

/// Car Options Handler
///
/// Active cars as `(uuid, license plate)` pairs.
#[endpoint(
    tags("cars"),
    summary = "Car Options",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OptionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Cars, Action::Read)?;

    let options = state
        .app
        .cars
        .list_car_options()
        .await
        .map_err(into_status_error)?;

    Ok(Json(options.into_iter().collect()))
}
