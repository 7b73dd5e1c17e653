//! Cars service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        cars::{
            PgCarsStore,
            data::{CarUpdate, NewCar},
            records::{CarOption, CarRecord, CarUuid},
        },
        lifecycle::{self, ResourceError},
    },
};

#[derive(Debug, Clone)]
pub struct PgCarsService {
    db: Db,
}

impl PgCarsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarsService for PgCarsService {
    async fn list_cars(&self, include_inactive: bool) -> Result<Vec<CarRecord>, ResourceError> {
        let mut tx = self.db.begin().await?;

        let cars = lifecycle::find_all(&mut PgCarsStore::new(&mut tx), include_inactive).await?;

        tx.commit().await?;

        Ok(cars)
    }

    async fn get_car(&self, car: CarUuid) -> Result<CarRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let car = lifecycle::find_one(&mut PgCarsStore::new(&mut tx), car).await?;

        tx.commit().await?;

        Ok(car)
    }

    async fn create_car(&self, car: NewCar) -> Result<CarRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let created = lifecycle::create(&mut PgCarsStore::new(&mut tx), car).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_car(&self, car: CarUuid, update: CarUpdate) -> Result<CarRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let updated = lifecycle::update(&mut PgCarsStore::new(&mut tx), car, update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_car(&self, car: CarUuid) -> Result<CarRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let removed = lifecycle::remove(&mut PgCarsStore::new(&mut tx), car).await?;

        tx.commit().await?;

        Ok(removed)
    }

    async fn list_car_options(&self) -> Result<Vec<CarOption>, ResourceError> {
        let mut tx = self.db.begin().await?;

        let options = lifecycle::find_active_options(&mut PgCarsStore::new(&mut tx)).await?;

        tx.commit().await?;

        Ok(options)
    }
}

#[automock]
#[async_trait]
pub trait CarsService: Send + Sync {
    /// Lists cars ordered by license plate.
    async fn list_cars(&self, include_inactive: bool) -> Result<Vec<CarRecord>, ResourceError>;

    /// Retrieves a car, including soft-deleted ones.
    async fn get_car(&self, car: CarUuid) -> Result<CarRecord, ResourceError>;

    /// Registers a car under a license plate no active car carries.
    async fn create_car(&self, car: NewCar) -> Result<CarRecord, ResourceError>;

    /// Applies a partial update to a car.
    async fn update_car(&self, car: CarUuid, update: CarUpdate) -> Result<CarRecord, ResourceError>;

    /// Soft-deletes a car.
    async fn remove_car(&self, car: CarUuid) -> Result<CarRecord, ResourceError>;

    /// Active cars labelled by license plate.
    async fn list_car_options(&self) -> Result<Vec<CarOption>, ResourceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            cars::records::CarStatus,
            rental_companies::{RentalCompaniesService, records::RentalCompanyUuid},
        },
        test::{TestContext, helpers},
        validation::has_field_error,
    };

    use super::*;

    #[tokio::test]
    async fn license_plate_is_reusable_after_removal() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx.cars.create_car(helpers::new_car("AB12 CDE")).await?;

        let duplicate = ctx.cars.create_car(helpers::new_car("AB12 CDE")).await;

        assert!(matches!(duplicate, Err(ResourceError::Conflict { .. })));

        ctx.cars.remove_car(first.uuid).await?;

        let second = ctx.cars.create_car(helpers::new_car("AB12 CDE")).await?;

        assert_ne!(first.uuid, second.uuid);
        assert!(!ctx.cars.get_car(first.uuid).await?.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn stores_status_and_mileage() -> TestResult {
        let ctx = TestContext::new().await;

        let car = ctx
            .cars
            .create_car(NewCar {
                mileage_km: 48_250,
                status: CarStatus::InMaintenance,
                ..helpers::new_car("XY99 ZZZ")
            })
            .await?;

        let fetched = ctx.cars.get_car(car.uuid).await?;

        assert_eq!(fetched.mileage_km, 48_250);
        assert_eq!(fetched.status, CarStatus::InMaintenance);

        let updated = ctx
            .cars
            .update_car(
                car.uuid,
                CarUpdate {
                    status: Some(CarStatus::Available),
                    ..CarUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.status, CarStatus::Available);
        assert_eq!(updated.mileage_km, 48_250);
        assert_eq!(updated.license_plate, "XY99 ZZZ");

        Ok(())
    }

    #[tokio::test]
    async fn links_to_an_existing_rental_company() -> TestResult {
        let ctx = TestContext::new().await;

        let company = ctx
            .rental_companies
            .create_rental_company(helpers::new_rental_company("Hertz"))
            .await?;

        let car = ctx
            .cars
            .create_car(NewCar {
                rental_company_uuid: Some(company.uuid),
                ..helpers::new_car("HZ01 AAA")
            })
            .await?;

        assert_eq!(car.rental_company_uuid, Some(company.uuid));

        Ok(())
    }

    #[tokio::test]
    async fn update_can_unlink_rental_company_and_clear_vin() -> TestResult {
        let ctx = TestContext::new().await;

        let company = ctx
            .rental_companies
            .create_rental_company(helpers::new_rental_company("Hertz"))
            .await?;

        let car = ctx
            .cars
            .create_car(NewCar {
                vin: Some("1HGCM82633A004352".to_string()),
                rental_company_uuid: Some(company.uuid),
                ..helpers::new_car("HZ01 AAA")
            })
            .await?;

        let untouched = ctx
            .cars
            .update_car(
                car.uuid,
                CarUpdate {
                    mileage_km: Some(100),
                    ..CarUpdate::default()
                },
            )
            .await?;

        assert_eq!(untouched.rental_company_uuid, Some(company.uuid));
        assert_eq!(untouched.vin.as_deref(), Some("1HGCM82633A004352"));

        let cleared = ctx
            .cars
            .update_car(
                car.uuid,
                CarUpdate {
                    vin: Some(None),
                    rental_company_uuid: Some(None),
                    ..CarUpdate::default()
                },
            )
            .await?;

        assert_eq!(cleared.rental_company_uuid, None);
        assert_eq!(cleared.vin, None);
        assert_eq!(cleared.mileage_km, 100);

        let fetched = ctx.cars.get_car(car.uuid).await?;

        assert_eq!(fetched.rental_company_uuid, None);

        Ok(())
    }

    #[tokio::test]
    async fn mileage_beyond_the_stored_range_is_invalid() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .cars
            .create_car(NewCar {
                mileage_km: u64::MAX,
                ..helpers::new_car("HZ01 AAA")
            })
            .await;

        assert!(
            matches!(result, Err(ResourceError::Invalid { ref errors, .. }) if has_field_error(errors, "mileage_km")),
            "expected Invalid, got {result:?}"
        );
        assert!(ctx.cars.list_cars(true).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unknown_rental_company_is_an_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .cars
            .create_car(NewCar {
                rental_company_uuid: Some(RentalCompanyUuid::new()),
                ..helpers::new_car("HZ01 AAA")
            })
            .await;

        assert!(matches!(result, Err(ResourceError::InvalidReference)));

        Ok(())
    }

    #[tokio::test]
    async fn options_cover_active_cars_only() -> TestResult {
        let ctx = TestContext::new().await;

        let kept = ctx.cars.create_car(helpers::new_car("BB22 BBB")).await?;
        let removed = ctx.cars.create_car(helpers::new_car("AA11 AAA")).await?;

        ctx.cars.remove_car(removed.uuid).await?;

        let options = ctx.cars.list_car_options().await?;

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].uuid, kept.uuid);
        assert_eq!(options[0].label, "BB22 BBB");

        Ok(())
    }
}
