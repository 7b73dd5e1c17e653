//! Cars Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::{convert_column, parse_column},
    domain::{
        cars::{
            data::{CarUpdate, NewCar},
            records::{CarOption, CarRecord, CarUuid},
        },
        lifecycle::{OptionsStore, ResourceStore},
        rental_companies::records::RentalCompanyUuid,
    },
};

const FIND_CAR_SQL: &str = include_str!("sql/find_car.sql");
const FIND_ACTIVE_CAR_BY_LICENSE_PLATE_SQL: &str =
    include_str!("sql/find_active_car_by_license_plate.sql");
const LIST_CARS_SQL: &str = include_str!("sql/list_cars.sql");
const LIST_CAR_OPTIONS_SQL: &str = include_str!("sql/list_car_options.sql");
const CREATE_CAR_SQL: &str = include_str!("sql/create_car.sql");
const UPDATE_CAR_SQL: &str = include_str!("sql/update_car.sql");

/// Cars store bound to an open transaction.
#[derive(Debug)]
pub(crate) struct PgCarsStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgCarsStore<'c> {
    pub(crate) fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> ResourceStore<CarRecord> for PgCarsStore<'c> {
    async fn find_unique(&mut self, uuid: CarUuid) -> Result<Option<CarRecord>, sqlx::Error> {
        query_as::<Postgres, CarRecord>(FIND_CAR_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn find_active_by_key(
        &mut self,
        key: &str,
        excluding: Option<CarUuid>,
    ) -> Result<Option<CarRecord>, sqlx::Error> {
        query_as::<Postgres, CarRecord>(FIND_ACTIVE_CAR_BY_LICENSE_PLATE_SQL)
            .bind(key)
            .bind(excluding.map(CarUuid::into_uuid))
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn find_many(&mut self, include_inactive: bool) -> Result<Vec<CarRecord>, sqlx::Error> {
        query_as::<Postgres, CarRecord>(LIST_CARS_SQL)
            .bind(include_inactive)
            .fetch_all(&mut *self.conn)
            .await
    }

    async fn create(&mut self, new: NewCar) -> Result<CarRecord, sqlx::Error> {
        let mileage_km: i64 = convert_column("mileage_km", new.mileage_km)?;

        query_as::<Postgres, CarRecord>(CREATE_CAR_SQL)
            .bind(CarUuid::new().into_uuid())
            .bind(new.license_plate)
            .bind(new.vin)
            .bind(new.make)
            .bind(new.model)
            .bind(new.year)
            .bind(mileage_km)
            .bind(new.status.to_string())
            .bind(new.rental_company_uuid.map(RentalCompanyUuid::into_uuid))
            .bind(new.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }

    async fn update(&mut self, uuid: CarUuid, patch: CarUpdate) -> Result<CarRecord, sqlx::Error> {
        let mileage_km: Option<i64> = patch
            .mileage_km
            .map(|mileage| convert_column("mileage_km", mileage))
            .transpose()?;

        query_as::<Postgres, CarRecord>(UPDATE_CAR_SQL)
            .bind(uuid.into_uuid())
            .bind(patch.license_plate)
            .bind(patch.vin.is_some())
            .bind(patch.vin.flatten())
            .bind(patch.make)
            .bind(patch.model)
            .bind(patch.year)
            .bind(mileage_km)
            .bind(patch.status.map(|status| status.to_string()))
            .bind(patch.rental_company_uuid.is_some())
            .bind(
                patch
                    .rental_company_uuid
                    .flatten()
                    .map(RentalCompanyUuid::into_uuid),
            )
            .bind(patch.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }
}

#[async_trait]
impl<'c> OptionsStore<CarRecord> for PgCarsStore<'c> {
    async fn find_active_options(&mut self) -> Result<Vec<CarOption>, sqlx::Error> {
        query_as::<Postgres, CarOption>(LIST_CAR_OPTIONS_SQL)
            .fetch_all(&mut *self.conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CarRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let mileage_km: i64 = row.try_get("mileage_km")?;
        let status: String = row.try_get("status")?;

        Ok(Self {
            uuid: CarUuid::from_uuid(row.try_get("uuid")?),
            license_plate: row.try_get("license_plate")?,
            vin: row.try_get("vin")?,
            make: row.try_get("make")?,
            model: row.try_get("model")?,
            year: row.try_get("year")?,
            mileage_km: convert_column("mileage_km", mileage_km)?,
            status: parse_column("status", &status)?,
            rental_company_uuid: row
                .try_get::<Option<Uuid>, _>("rental_company_uuid")?
                .map(RentalCompanyUuid::from_uuid),
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
