//! Create Car Request Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, Principal, ResourceKind},
    domain::car_requests::{data::NewCarRequest, records::CarRequestStatus},
};

use crate::{
    car_requests::get::CarRequestResponse, errors::into_status_error, extensions::*, state::State,
};

/// Create Car Request Request
///
/// The requester is always the authenticated user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCarRequestRequest {
    pub car_uuid: Option<Uuid>,
    pub purpose: String,
    pub destination: Option<String>,
    /// RFC 3339 timestamp
    #[salvo(schema(value_type = String))]
    pub starts_at: Timestamp,
    /// RFC 3339 timestamp, after `starts_at`
    #[salvo(schema(value_type = String))]
    pub ends_at: Timestamp,
    /// Defaults to `pending`
    #[salvo(schema(value_type = Option<String>))]
    pub status: Option<CarRequestStatus>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
}

impl CreateCarRequestRequest {
    fn into_new(self, requester: &Principal) -> NewCarRequest {
        NewCarRequest {
            requester_uuid: requester.uuid,
            car_uuid: self.car_uuid.map(Into::into),
            purpose: self.purpose,
            destination: self.destination,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            status: self.status.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

/// Create Car Request Handler
#[endpoint(
    tags("car-requests"),
    summary = "Create Car Request",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Car request filed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown car or requester"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCarRequestRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CarRequestResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.authorize_or_403(ResourceKind::CarRequests, Action::Create)?;

    let request = state
        .app
        .car_requests
        .create_car_request(json.into_inner().into_new(&principal))
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/car-requests/{}", request.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(request.into()))
}
