//! Update Part Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::parts::data::PartUpdate,
};

use crate::{errors::into_status_error, extensions::*, parts::get::PartResponse, state::State};

/// Update Part Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePartRequest {
    pub part_number: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub unit_price: Option<u64>,
    pub is_active: Option<bool>,
}

impl From<UpdatePartRequest> for PartUpdate {
    fn from(request: UpdatePartRequest) -> Self {
        PartUpdate {
            part_number: request.part_number,
            name: request.name,
            quantity: request.quantity,
            unit_price: request.unit_price,
            is_active: request.is_active,
        }
    }
}

/// Update Part Handler
#[endpoint(
    tags("parts"),
    summary = "Update Part",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Part updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Part not found"),
        (status_code = StatusCode::CONFLICT, description = "An active part already has this part number"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdatePartRequest>,
    depot: &mut Depot,
) -> Result<Json<PartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Parts, Action::Update)?;

    let part = state
        .app
        .parts
        .update_part(uuid.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(part.into()))
}
