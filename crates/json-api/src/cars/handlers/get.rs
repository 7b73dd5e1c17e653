//! Get Car Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::cars::records::{CarRecord, CarStatus},
};

use crate::{errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CarResponse {
    pub uuid: Uuid,

    /// Unique among active cars
    pub license_plate: String,

    pub vin: Option<String>,

    pub make: String,

    pub model: String,

    pub year: i32,

    pub mileage_km: u64,

    /// One of `available`, `in_use`, `in_maintenance`, `retired`
    #[salvo(schema(value_type = String))]
    pub status: CarStatus,

    /// The rental company the car is leased from, if any
    pub rental_company_uuid: Option<Uuid>,

    pub is_active: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<CarRecord> for CarResponse {
    fn from(car: CarRecord) -> Self {
        CarResponse {
            uuid: car.uuid.into(),
            license_plate: car.license_plate,
            vin: car.vin,
            make: car.make,
            model: car.model,
            year: car.year,
            mileage_km: car.mileage_km,
            status: car.status,
            rental_company_uuid: car.rental_company_uuid.map(Into::into),
            is_active: car.is_active,
            created_at: car.created_at.to_string(),
            updated_at: car.updated_at.to_string(),
        }
    }
}

/// Get Car Handler
#[endpoint(
    tags("cars"),
    summary = "Get Car",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Car found"),
        (status_code = StatusCode::NOT_FOUND, description = "Car not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CarResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Cars, Action::Read)?;

    let car = state
        .app
        .cars
        .get_car(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(car.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use fleet_app::domain::{
        cars::{MockCarsService, records::CarUuid},
        lifecycle::ResourceError,
    };

    use crate::test_helpers::{admin, cars_service_as, driver};

    use super::{super::tests::make_car, *};

    fn route() -> Router {
        Router::with_path("cars/{uuid}").get(handler)
    }

    #[tokio::test]
    async fn test_drivers_can_read_cars() -> TestResult {
        let uuid = CarUuid::new();
        let car = make_car(uuid, "AB12 CDE");

        let mut repo = MockCarsService::new();

        repo.expect_get_car()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(car));

        let mut res = TestClient::get(format!("http://example.com/cars/{uuid}"))
            .send(&cars_service_as(driver(), repo, route()))
            .await;

        let body: CarResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.license_plate, "AB12 CDE");
        assert_eq!(body.status, CarStatus::Available);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_car_returns_404() -> TestResult {
        let mut repo = MockCarsService::new();

        repo.expect_get_car()
            .once()
            .return_once(|_| Err(ResourceError::NotFound { resource: "car" }));

        let res = TestClient::get(format!("http://example.com/cars/{}", Uuid::now_v7()))
            .send(&cars_service_as(admin(), repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
