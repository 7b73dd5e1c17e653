//! Users Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::parse_column,
    domain::{
        lifecycle::{OptionsStore, ResourceStore},
        users::{
            data::{NewUser, UserUpdate},
            records::{UserOption, UserRecord, UserUuid},
        },
    },
};

const FIND_USER_SQL: &str = include_str!("sql/find_user.sql");
const FIND_ACTIVE_USER_BY_EMAIL_SQL: &str = include_str!("sql/find_active_user_by_email.sql");
const FIND_ACTIVE_USER_BY_TOKEN_HASH_SQL: &str =
    include_str!("sql/find_active_user_by_token_hash.sql");
const LIST_USERS_SQL: &str = include_str!("sql/list_users.sql");
const LIST_USER_OPTIONS_SQL: &str = include_str!("sql/list_user_options.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const UPDATE_USER_SQL: &str = include_str!("sql/update_user.sql");

/// Users store bound to an open transaction.
#[derive(Debug)]
pub(crate) struct PgUsersStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgUsersStore<'c> {
    pub(crate) fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    pub(crate) async fn find_active_by_token_hash(
        &mut self,
        token_hash: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(FIND_ACTIVE_USER_BY_TOKEN_HASH_SQL)
            .bind(token_hash)
            .fetch_optional(&mut *self.conn)
            .await
    }
}

#[async_trait]
impl<'c> ResourceStore<UserRecord> for PgUsersStore<'c> {
    async fn find_unique(&mut self, uuid: UserUuid) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(FIND_USER_SQL)
            .bind(uuid.into_uuid())
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn find_active_by_key(
        &mut self,
        key: &str,
        excluding: Option<UserUuid>,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(FIND_ACTIVE_USER_BY_EMAIL_SQL)
            .bind(key)
            .bind(excluding.map(UserUuid::into_uuid))
            .fetch_optional(&mut *self.conn)
            .await
    }

    async fn find_many(&mut self, include_inactive: bool) -> Result<Vec<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(LIST_USERS_SQL)
            .bind(include_inactive)
            .fetch_all(&mut *self.conn)
            .await
    }

    async fn create(&mut self, new: NewUser) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(UserUuid::new().into_uuid())
            .bind(new.email)
            .bind(new.name)
            .bind(new.role.to_string())
            .bind(new.department.to_string())
            .bind(new.token_hash)
            .bind(new.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }

    async fn update(&mut self, uuid: UserUuid, patch: UserUpdate) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(UPDATE_USER_SQL)
            .bind(uuid.into_uuid())
            .bind(patch.email)
            .bind(patch.name)
            .bind(patch.role.map(|role| role.to_string()))
            .bind(patch.department.map(|department| department.to_string()))
            .bind(patch.is_active)
            .fetch_one(&mut *self.conn)
            .await
    }
}

#[async_trait]
impl<'c> OptionsStore<UserRecord> for PgUsersStore<'c> {
    async fn find_active_options(&mut self) -> Result<Vec<UserOption>, sqlx::Error> {
        query_as::<Postgres, UserOption>(LIST_USER_OPTIONS_SQL)
            .fetch_all(&mut *self.conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role: String = row.try_get("role")?;
        let department: String = row.try_get("department")?;

        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            role: parse_column("role", &role)?,
            department: parse_column("department", &department)?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
