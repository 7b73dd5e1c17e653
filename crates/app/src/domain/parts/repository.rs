//! Parts Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::convert_column,
    domain::{
        lifecycle::{OptionsStore, ResourceStore},
        parts::{
            data::{NewPart, PartUpdate},
            records::{PartOption, PartRecord, PartUuid},
        },
    },
};

const FIND_PART_SQL: &str = include_str!("sql/find_part.sql");
const FIND_ACTIVE_PART_BY_PART_NUMBER_SQL: &str =
    include_str!("sql/find_active_part_by_part_number.sql");
const LIST_PARTS_SQL: &str = include_str!("sql/list_parts.sql");
const LIST_PART_OPTIONS_SQL: &str = include_str!("sql/list_part_options.sql");
const CREATE_PART_SQL: &str = include_str!("sql/create_part.sql");
const UPDATE_PART_SQL: &str = include_str!("sql/update_part.sql");

/// Parts store bound to an open transaction.
#[derive(Debug)]
pub(crate) struct PgPartsStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgPartsStore<'c> {
    pub(crate) fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> ResourceStore<PartRecord> for PgPartsStore<'c> {
    async fn find_unique(&mut self, uuid: PartUuid) -> Result<Option<PartRecord>, sqlx::Error> {
        query_as::<Postgres, PartRecord>(FIND_PART_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn find_active_by_key(
        &mut self,
        key: &str,
        excluding: Option<PartUuid>,
    ) -> Result<Option<PartRecord>, sqlx::Error> {
        query_as::<Postgres, PartRecord>(FIND_ACTIVE_PART_BY_PART_NUMBER_SQL)
            .bind(key)
            .bind(excluding.map(PartUuid::into_uuid))
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn find_many(&mut self, include_inactive: bool) -> Result<Vec<PartRecord>, sqlx::Error> {
        query_as::<Postgres, PartRecord>(LIST_PARTS_SQL)
            .bind(include_inactive)
            .fetch_all(&mut *self.conn)
            .await
    }

    async fn create(&mut self, new: NewPart) -> Result<PartRecord, sqlx::Error> {
        let unit_price: i64 = convert_column("unit_price", new.unit_price)?;

        query_as::<Postgres, PartRecord>(CREATE_PART_SQL)
            .bind(PartUuid::new().into_uuid())
            .bind(new.part_number)
            .bind(new.name)
            .bind(i64::from(new.quantity))
            .bind(unit_price)
            .bind(new.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }

    async fn update(&mut self, uuid: PartUuid, patch: PartUpdate) -> Result<PartRecord, sqlx::Error> {
        let unit_price: Option<i64> = patch
            .unit_price
            .map(|price| convert_column("unit_price", price))
            .transpose()?;

        query_as::<Postgres, PartRecord>(UPDATE_PART_SQL)
            .bind(uuid.into_uuid())
            .bind(patch.part_number)
            .bind(patch.name)
            .bind(patch.quantity.map(i64::from))
            .bind(unit_price)
            .bind(patch.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }
}

#[async_trait]
impl<'c> OptionsStore<PartRecord> for PgPartsStore<'c> {
    async fn find_active_options(&mut self) -> Result<Vec<PartOption>, sqlx::Error> {
        query_as::<Postgres, PartOption>(LIST_PART_OPTIONS_SQL)
            .fetch_all(&mut *self.conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i64 = row.try_get("quantity")?;
        let unit_price: i64 = row.try_get("unit_price")?;

        Ok(Self {
            uuid: PartUuid::from_uuid(row.try_get("uuid")?),
            part_number: row.try_get("part_number")?,
            name: row.try_get("name")?,
            quantity: convert_column("quantity", quantity)?,
            unit_price: convert_column("unit_price", unit_price)?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
