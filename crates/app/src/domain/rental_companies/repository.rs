//! Rental Companies Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{
    lifecycle::{OptionsStore, ResourceStore},
    rental_companies::{
        data::{NewRentalCompany, RentalCompanyUpdate},
        records::{RentalCompanyOption, RentalCompanyRecord, RentalCompanyUuid},
    },
};

const FIND_RENTAL_COMPANY_SQL: &str = include_str!("sql/find_rental_company.sql");
const FIND_ACTIVE_RENTAL_COMPANY_BY_NAME_SQL: &str =
    include_str!("sql/find_active_rental_company_by_name.sql");
const LIST_RENTAL_COMPANIES_SQL: &str = include_str!("sql/list_rental_companies.sql");
const LIST_RENTAL_COMPANY_OPTIONS_SQL: &str = include_str!("sql/list_rental_company_options.sql");
const CREATE_RENTAL_COMPANY_SQL: &str = include_str!("sql/create_rental_company.sql");
const UPDATE_RENTAL_COMPANY_SQL: &str = include_str!("sql/update_rental_company.sql");

/// Rental companies store bound to an open transaction.
#[derive(Debug)]
pub(crate) struct PgRentalCompaniesStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgRentalCompaniesStore<'c> {
    pub(crate) fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> ResourceStore<RentalCompanyRecord> for PgRentalCompaniesStore<'c> {
    async fn find_unique(
        &mut self,
        uuid: RentalCompanyUuid,
    ) -> Result<Option<RentalCompanyRecord>, sqlx::Error> {
        query_as::<Postgres, RentalCompanyRecord>(FIND_RENTAL_COMPANY_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn find_active_by_key(
        &mut self,
        key: &str,
        excluding: Option<RentalCompanyUuid>,
    ) -> Result<Option<RentalCompanyRecord>, sqlx::Error> {
        query_as::<Postgres, RentalCompanyRecord>(FIND_ACTIVE_RENTAL_COMPANY_BY_NAME_SQL)
            .bind(key)
            .bind(excluding.map(RentalCompanyUuid::into_uuid))
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn find_many(
        &mut self,
        include_inactive: bool,
    ) -> Result<Vec<RentalCompanyRecord>, sqlx::Error> {
        query_as::<Postgres, RentalCompanyRecord>(LIST_RENTAL_COMPANIES_SQL)
            .bind(include_inactive)
            .fetch_all(&mut *self.conn)
            .await
    }

    async fn create(&mut self, new: NewRentalCompany) -> Result<RentalCompanyRecord, sqlx::Error> {
        query_as::<Postgres, RentalCompanyRecord>(CREATE_RENTAL_COMPANY_SQL)
            .bind(RentalCompanyUuid::new().into_uuid())
            .bind(new.name)
            .bind(new.contact_email)
            .bind(new.phone)
            .bind(new.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }

    async fn update(
        &mut self,
        uuid: RentalCompanyUuid,
        patch: RentalCompanyUpdate,
    ) -> Result<RentalCompanyRecord, sqlx::Error> {
        query_as::<Postgres, RentalCompanyRecord>(UPDATE_RENTAL_COMPANY_SQL)
            .bind(uuid.into_uuid())
            .bind(patch.name)
            .bind(patch.contact_email.is_some())
            .bind(patch.contact_email.flatten())
            .bind(patch.phone.is_some())
            .bind(patch.phone.flatten())
            .bind(patch.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }
}

#[async_trait]
impl<'c> OptionsStore<RentalCompanyRecord> for PgRentalCompaniesStore<'c> {
    async fn find_active_options(&mut self) -> Result<Vec<RentalCompanyOption>, sqlx::Error> {
        query_as::<Postgres, RentalCompanyOption>(LIST_RENTAL_COMPANY_OPTIONS_SQL)
            .fetch_all(&mut *self.conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RentalCompanyRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: RentalCompanyUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            contact_email: row.try_get("contact_email")?,
            phone: row.try_get("phone")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
