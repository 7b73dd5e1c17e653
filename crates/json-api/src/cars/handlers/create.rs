//! Create Car Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::cars::{data::NewCar, records::CarStatus},
};

use crate::{cars::get::CarResponse, errors::into_status_error, extensions::*, state::State};

/// Create Car Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCarRequest {
    pub license_plate: String,
    pub vin: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Defaults to 0
    pub mileage_km: Option<u64>,
    /// Defaults to `available`
    #[salvo(schema(value_type = Option<String>))]
    pub status: Option<CarStatus>,
    pub rental_company_uuid: Option<Uuid>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
}

impl From<CreateCarRequest> for NewCar {
    fn from(request: CreateCarRequest) -> Self {
        NewCar {
            license_plate: request.license_plate,
            vin: request.vin,
            make: request.make,
            model: request.model,
            year: request.year,
            mileage_km: request.mileage_km.unwrap_or_default(),
            status: request.status.unwrap_or_default(),
            rental_company_uuid: request.rental_company_uuid.map(Into::into),
            is_active: request.is_active.unwrap_or(true),
        }
    }
}

/// Create Car Handler
#[endpoint(
    tags("cars"),
    summary = "Create Car",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Car created"),
        (status_code = StatusCode::CONFLICT, description = "An active car already has this license plate"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown rental company"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCarRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CarResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Cars, Action::Create)?;

    let car = state
        .app
        .cars
        .create_car(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/cars/{}", car.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(car.into()))
}
