//! User Options Handler

use std::sync::Arc;

use salvo::prelude::*;

use fleet_app::auth::{Action, ResourceKind};

use crate::{errors::into_status_error, extensions::*, options::OptionsResponse, state::State};

/// User Options Handler
///
/// Active users as `(uuid, email)` pairs.
#[endpoint(
    tags("users"),
    summary = "User Options",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OptionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Users, Action::Read)?;

    let options = state
        .app
        .users
        .list_user_options()
        .await
        .map_err(into_status_error)?;

    Ok(Json(options.into_iter().collect()))
}
