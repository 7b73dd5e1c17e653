//! Car Requests Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::parse_column,
    domain::{
        car_requests::{
            data::{CarRequestUpdate, NewCarRequest},
            records::{CarRequestRecord, CarRequestUuid},
        },
        cars::records::CarUuid,
        lifecycle::ResourceStore,
        users::records::UserUuid,
    },
};

const FIND_CAR_REQUEST_SQL: &str = include_str!("sql/find_car_request.sql");
const LIST_CAR_REQUESTS_SQL: &str = include_str!("sql/list_car_requests.sql");
const CREATE_CAR_REQUEST_SQL: &str = include_str!("sql/create_car_request.sql");
const UPDATE_CAR_REQUEST_SQL: &str = include_str!("sql/update_car_request.sql");

/// Car requests store bound to an open transaction.
#[derive(Debug)]
pub(crate) struct PgCarRequestsStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgCarRequestsStore<'c> {
    pub(crate) fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> ResourceStore<CarRequestRecord> for PgCarRequestsStore<'c> {
    async fn find_unique(
        &mut self,
        uuid: CarRequestUuid,
    ) -> Result<Option<CarRequestRecord>, sqlx::Error> {
        query_as::<Postgres, CarRequestRecord>(FIND_CAR_REQUEST_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn find_many(
        &mut self,
        include_inactive: bool,
    ) -> Result<Vec<CarRequestRecord>, sqlx::Error> {
        query_as::<Postgres, CarRequestRecord>(LIST_CAR_REQUESTS_SQL)
            .bind(include_inactive)
            .fetch_all(&mut *self.conn)
            .await
    }

    async fn create(&mut self, new: NewCarRequest) -> Result<CarRequestRecord, sqlx::Error> {
        query_as::<Postgres, CarRequestRecord>(CREATE_CAR_REQUEST_SQL)
            .bind(CarRequestUuid::new().into_uuid())
            .bind(new.requester_uuid.into_uuid())
            .bind(new.car_uuid.map(CarUuid::into_uuid))
            .bind(new.purpose)
            .bind(new.destination)
            .bind(SqlxTimestamp::from(new.starts_at))
            .bind(SqlxTimestamp::from(new.ends_at))
            .bind(new.status.to_string())
            .bind(new.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }

    async fn update(
        &mut self,
        uuid: CarRequestUuid,
        patch: CarRequestUpdate,
    ) -> Result<CarRequestRecord, sqlx::Error> {
        query_as::<Postgres, CarRequestRecord>(UPDATE_CAR_REQUEST_SQL)
            .bind(uuid.into_uuid())
            .bind(patch.car_uuid.is_some())
            .bind(patch.car_uuid.flatten().map(CarUuid::into_uuid))
            .bind(patch.purpose)
            .bind(patch.destination.is_some())
            .bind(patch.destination.flatten())
            .bind(patch.starts_at.map(SqlxTimestamp::from))
            .bind(patch.ends_at.map(SqlxTimestamp::from))
            .bind(patch.status.map(|status| status.to_string()))
            .bind(patch.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CarRequestRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        Ok(Self {
            uuid: CarRequestUuid::from_uuid(row.try_get("uuid")?),
            requester_uuid: UserUuid::from_uuid(row.try_get("requester_uuid")?),
            car_uuid: row
                .try_get::<Option<Uuid>, _>("car_uuid")?
                .map(CarUuid::from_uuid),
            purpose: row.try_get("purpose")?,
            destination: row.try_get("destination")?,
            starts_at: row.try_get::<SqlxTimestamp, _>("starts_at")?.to_jiff(),
            ends_at: row.try_get::<SqlxTimestamp, _>("ends_at")?.to_jiff(),
            status: parse_column("status", &status)?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
