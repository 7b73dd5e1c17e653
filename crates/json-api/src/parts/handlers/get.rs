//! Get Part Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::parts::records::PartRecord,
};

use crate::{errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PartResponse {
    pub uuid: Uuid,

    /// Unique among active parts
    pub part_number: String,

    pub name: String,

    /// Units in stock
    pub quantity: u32,

    /// Price per unit in pence/cents
    pub unit_price: u64,

    pub is_active: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<PartRecord> for PartResponse {
    fn from(part: PartRecord) -> Self {
        PartResponse {
            uuid: part.uuid.into(),
            part_number: part.part_number,
            name: part.name,
            quantity: part.quantity,
            unit_price: part.unit_price,
            is_active: part.is_active,
            created_at: part.created_at.to_string(),
            updated_at: part.updated_at.to_string(),
        }
    }
}

/// Get Part Handler
#[endpoint(
    tags("parts"),
    summary = "Get Part",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Part found"),
        (status_code = StatusCode::NOT_FOUND, description = "Part not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Parts, Action::Read)?;

    let part = state
        .app
        .parts
        .get_part(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(part.into()))
}
