//! Delete User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use fleet_app::auth::{Action, ResourceKind};

use crate::{errors::into_status_error, extensions::*, state::State, users::get::UserResponse};

/// Delete User Handler
///
/// A removed user's token stops authenticating immediately.
#[endpoint(
    tags("users"),
    summary = "Delete User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User deactivated"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Users, Action::Delete)?;

    let user = state
        .app
        .users
        .remove_user(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
