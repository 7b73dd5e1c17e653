//! Part Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use fleet_app::auth::{Action, ResourceKind};

use crate::{errors::into_status_error, extensions::*, parts::get::PartResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PartsResponse {
    /// Parts ordered by part number
    pub parts: Vec<PartResponse>,
}

/// Part Index Handler
#[endpoint(
    tags("parts"),
    summary = "List Parts",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    include_inactive: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<PartsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Parts, Action::Read)?;

    let parts = state
        .app
        .parts
        .list_parts(include_inactive.into_inner().unwrap_or(false))
        .await
        .map_err(into_status_error)?;

    Ok(Json(PartsResponse {
        parts: parts.into_iter().map(Into::into).collect(),
    }))
}
