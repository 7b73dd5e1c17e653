//! Update Car Handler

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
    domain::cars::{data::CarUpdate, records::CarStatus},
};

use crate::{cars::get::CarResponse, errors::into_status_error, extensions::*, state::State};

/// Update Car Request
///
/// Omitted fields keep their stored value. `null` clears `vin` and
/// `rental_company_uuid`.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCarRequest {
    pub license_plate: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[salvo(schema(value_type = Option<String>))]
    pub vin: Option<Option<String>>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub mileage_km: Option<u64>,
    #[salvo(schema(value_type = Option<String>))]
    pub status: Option<CarStatus>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[salvo(schema(value_type = Option<Uuid>))]
    pub rental_company_uuid: Option<Option<Uuid>>,
    pub is_active: Option<bool>,
}

impl From<UpdateCarRequest> for CarUpdate {
    fn from(request: UpdateCarRequest) -> Self {
        CarUpdate {
            license_plate: request.license_plate,
            vin: request.vin,
            make: request.make,
            model: request.model,
            year: request.year,
            mileage_km: request.mileage_km,
            status: request.status,
            rental_company_uuid: request
                .rental_company_uuid
                .map(|company| company.map(Into::into)),
            is_active: request.is_active,
        }
    }
}

/// Update Car Handler
#[endpoint(
    tags("cars"),
    summary = "Update Car",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Car updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Car not found"),
        (status_code = StatusCode::CONFLICT, description = "An active car already has this license plate"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
#[tracing::instrument(
    name = "cars.update",
    skip(uuid, json, depot),
    fields(user_uuid = tracing::field::Empty, car_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateCarRequest>,
    depot: &mut Depot,
) -> Result<Json<CarResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.authorize_or_403(ResourceKind::Cars, Action::Update)?;
    let uuid = uuid.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(principal.uuid));
    span.record("car_uuid", tracing::field::display(uuid));

    let car = state
        .app
        .cars
        .update_car(uuid.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(car.into()))
}
