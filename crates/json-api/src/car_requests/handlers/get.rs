//! Get Car Request Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::car_requests::records::{CarRequestRecord, CarRequestStatus},
};

use crate::{errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CarRequestResponse {
    pub uuid: Uuid,

    /// The user asking for a car
    pub requester_uuid: Uuid,

    /// The car assigned to the request, once there is one
    pub car_uuid: Option<Uuid>,

    pub purpose: String,

    pub destination: Option<String>,

    pub starts_at: String,

    pub ends_at: String,

    /// One of `pending`, `approved`, `rejected`, `cancelled`
    #[salvo(schema(value_type = String))]
    pub status: CarRequestStatus,

    pub is_active: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<CarRequestRecord> for CarRequestResponse {
    fn from(request: CarRequestRecord) -> Self {
        CarRequestResponse {
            uuid: request.uuid.into(),
            requester_uuid: request.requester_uuid.into(),
            car_uuid: request.car_uuid.map(Into::into),
            purpose: request.purpose,
            destination: request.destination,
            starts_at: request.starts_at.to_string(),
            ends_at: request.ends_at.to_string(),
            status: request.status,
            is_active: request.is_active,
            created_at: request.created_at.to_string(),
            updated_at: request.updated_at.to_string(),
        }
    }
}

/// Get Car Request Handler
#[endpoint(
    tags("car-requests"),
    summary = "Get Car Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Car request found"),
        (status_code = StatusCode::NOT_FOUND, description = "Car request not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CarRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::CarRequests, Action::Read)?;

    let request = state
        .app
        .car_requests
        .get_car_request(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(request.into()))
}
