//! Delete Part Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use fleet_app::auth::{Action, ResourceKind};

use crate::{errors::into_status_error, extensions::*, parts::get::PartResponse, state::State};

/// Delete Part Handler
#[endpoint(
    tags("parts"),
    summary = "Delete Part",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Part deactivated"),
        (status_code = StatusCode::NOT_FOUND, description = "Part not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Parts, Action::Delete)?;

    let part = state
        .app
        .parts
        .remove_part(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(part.into()))
}
