//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        lifecycle::{self, ResourceError},
        users::{
            PgUsersStore,
            data::{NewUser, UserUpdate},
            records::{UserOption, UserRecord, UserUuid},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn list_users(&self, include_inactive: bool) -> Result<Vec<UserRecord>, ResourceError> {
        let mut tx = self.db.begin().await?;

        let users = lifecycle::find_all(&mut PgUsersStore::new(&mut tx), include_inactive).await?;

        tx.commit().await?;

        Ok(users)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let user = lifecycle::find_one(&mut PgUsersStore::new(&mut tx), user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn create_user(&self, user: NewUser) -> Result<UserRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let created = lifecycle::create(&mut PgUsersStore::new(&mut tx), user).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_user(
        &self,
        user: UserUuid,
        update: UserUpdate,
    ) -> Result<UserRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let updated = lifecycle::update(&mut PgUsersStore::new(&mut tx), user, update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_user(&self, user: UserUuid) -> Result<UserRecord, ResourceError> {
        let mut tx = self.db.begin().await?;

        let removed = lifecycle::remove(&mut PgUsersStore::new(&mut tx), user).await?;

        tx.commit().await?;

        Ok(removed)
    }

    async fn list_user_options(&self) -> Result<Vec<UserOption>, ResourceError> {
        let mut tx = self.db.begin().await?;

        let options = lifecycle::find_active_options(&mut PgUsersStore::new(&mut tx)).await?;

        tx.commit().await?;

        Ok(options)
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserRecord>, ResourceError> {
        let mut conn = self.db.pool().acquire().await?;

        let user = PgUsersStore::new(&mut conn)
            .find_active_by_token_hash(token_hash)
            .await?;

        Ok(user)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Lists users ordered by e-mail.
    async fn list_users(&self, include_inactive: bool) -> Result<Vec<UserRecord>, ResourceError>;

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, ResourceError>;

    /// Creates a user with an e-mail no active user holds.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, ResourceError>;

    async fn update_user(
        &self,
        user: UserUuid,
        update: UserUpdate,
    ) -> Result<UserRecord, ResourceError>;

    /// Soft-deletes a user, which also revokes their bearer token.
    async fn remove_user(&self, user: UserUuid) -> Result<UserRecord, ResourceError>;

    async fn list_user_options(&self) -> Result<Vec<UserOption>, ResourceError>;

    /// Resolves an active user from the digest of their bearer token.
    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserRecord>, ResourceError>;
}
