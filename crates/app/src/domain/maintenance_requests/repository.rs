//! Maintenance Requests Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::parse_column,
    domain::{
        cars::records::CarUuid,
        lifecycle::ResourceStore,
        maintenance_requests::{
            data::{MaintenanceRequestUpdate, NewMaintenanceRequest},
            records::{MaintenanceRequestRecord, MaintenanceRequestUuid},
        },
        users::records::UserUuid,
    },
};

const FIND_MAINTENANCE_REQUEST_SQL: &str = include_str!("sql/find_maintenance_request.sql");
const LIST_MAINTENANCE_REQUESTS_SQL: &str = include_str!("sql/list_maintenance_requests.sql");
const CREATE_MAINTENANCE_REQUEST_SQL: &str = include_str!("sql/create_maintenance_request.sql");
const UPDATE_MAINTENANCE_REQUEST_SQL: &str = include_str!("sql/update_maintenance_request.sql");

/// Maintenance requests store bound to an open transaction.
#[derive(Debug)]
pub(crate) struct PgMaintenanceRequestsStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgMaintenanceRequestsStore<'c> {
    pub(crate) fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> ResourceStore<MaintenanceRequestRecord> for PgMaintenanceRequestsStore<'c> {
    async fn find_unique(
        &mut self,
        uuid: MaintenanceRequestUuid,
    ) -> Result<Option<MaintenanceRequestRecord>, sqlx::Error> {
        query_as::<Postgres, MaintenanceRequestRecord>(FIND_MAINTENANCE_REQUEST_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn find_many(
        &mut self,
        include_inactive: bool,
    ) -> Result<Vec<MaintenanceRequestRecord>, sqlx::Error> {
        query_as::<Postgres, MaintenanceRequestRecord>(LIST_MAINTENANCE_REQUESTS_SQL)
            .bind(include_inactive)
            .fetch_all(&mut *self.conn)
            .await
    }

    async fn create(
        &mut self,
        new: NewMaintenanceRequest,
    ) -> Result<MaintenanceRequestRecord, sqlx::Error> {
        query_as::<Postgres, MaintenanceRequestRecord>(CREATE_MAINTENANCE_REQUEST_SQL)
            .bind(MaintenanceRequestUuid::new().into_uuid())
            .bind(new.car_uuid.into_uuid())
            .bind(new.requested_by.into_uuid())
            .bind(new.description)
            .bind(new.priority.to_string())
            .bind(new.status.to_string())
            .bind(new.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }

    async fn update(
        &mut self,
        uuid: MaintenanceRequestUuid,
        patch: MaintenanceRequestUpdate,
    ) -> Result<MaintenanceRequestRecord, sqlx::Error> {
        query_as::<Postgres, MaintenanceRequestRecord>(UPDATE_MAINTENANCE_REQUEST_SQL)
            .bind(uuid.into_uuid())
            .bind(patch.description)
            .bind(patch.priority.map(|priority| priority.to_string()))
            .bind(patch.status.map(|status| status.to_string()))
            .bind(patch.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for MaintenanceRequestRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let priority: String = row.try_get("priority")?;
        let status: String = row.try_get("status")?;

        Ok(Self {
            uuid: MaintenanceRequestUuid::from_uuid(row.try_get("uuid")?),
            car_uuid: CarUuid::from_uuid(row.try_get("car_uuid")?),
            requested_by: UserUuid::from_uuid(row.try_get("requested_by")?),
            description: row.try_get("description")?,
            priority: parse_column("priority", &priority)?,
            status: parse_column("status", &status)?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
