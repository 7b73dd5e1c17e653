//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    auth::{
        AuthServiceError, BearerToken, Principal, generate_bearer_token, hash_bearer_token,
        is_well_formed_bearer_token,
    },
    database::Db,
    domain::users::{
        PgUsersService, UsersService,
        data::NewUser,
        records::{Department, Role, UserRecord},
    },
};

/// A user registration as entered by an administrator.
#[derive(Debug, Clone)]
pub struct UserRegistration {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Department,
}

/// Registration result with the one-time raw token.
#[derive(Debug)]
pub struct RegisteredUser {
    pub user: UserRecord,
    pub token: BearerToken,
}

#[derive(Debug, Clone)]
pub struct PgAuthService {
    users: PgUsersService,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            users: PgUsersService::new(db),
        }
    }

    /// Create a user and issue their bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error when the user fails validation, the e-mail is already
    /// held by an active user, or storage fails.
    pub async fn register_user(
        &self,
        registration: UserRegistration,
    ) -> Result<RegisteredUser, AuthServiceError> {
        let token = generate_bearer_token();

        let user = self
            .users
            .create_user(NewUser {
                email: registration.email,
                name: registration.name,
                role: registration.role,
                department: registration.department,
                token_hash: token.hash(),
                is_active: true,
            })
            .await?;

        Ok(RegisteredUser { user, token })
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        if !is_well_formed_bearer_token(bearer_token) {
            debug!("rejected malformed bearer token");

            return Err(AuthServiceError::NotFound);
        }

        let user = self
            .users
            .find_by_token_hash(&hash_bearer_token(bearer_token))
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        Ok(Principal::from(&user))
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the active user a bearer token was issued to.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::lifecycle::ResourceError, test::TestContext};

    use super::*;

    fn registration(email: &str) -> UserRegistration {
        UserRegistration {
            name: "Dana".to_string(),
            email: email.to_string(),
            role: Role::FleetManager,
            department: Department::Operations,
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates_its_user() -> TestResult {
        let ctx = TestContext::new().await;

        let registered = ctx
            .auth
            .register_user(registration("dana@fleet.example"))
            .await?;

        let principal = ctx
            .auth
            .authenticate_bearer(registered.token.as_str())
            .await?;

        assert_eq!(principal.uuid, registered.user.uuid);
        assert_eq!(principal.role, Role::FleetManager);
        assert_eq!(principal.department, Department::Operations);

        Ok(())
    }

    #[tokio::test]
    async fn removed_users_cannot_authenticate() -> TestResult {
        let ctx = TestContext::new().await;

        let registered = ctx
            .auth
            .register_user(registration("gone@fleet.example"))
            .await?;

        ctx.users.remove_user(registered.user.uuid).await?;

        let result = ctx
            .auth
            .authenticate_bearer(registered.token.as_str())
            .await;

        assert!(matches!(result, Err(AuthServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_and_malformed_tokens_are_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        let unknown = generate_bearer_token();

        assert!(matches!(
            ctx.auth.authenticate_bearer(unknown.as_str()).await,
            Err(AuthServiceError::NotFound)
        ));
        assert!(matches!(
            ctx.auth.authenticate_bearer("not-a-token").await,
            Err(AuthServiceError::NotFound)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.auth
            .register_user(registration("dup@fleet.example"))
            .await?;

        let result = ctx
            .auth
            .register_user(registration("dup@fleet.example"))
            .await;

        assert!(matches!(
            result,
            Err(AuthServiceError::Users(ResourceError::Conflict { .. }))
        ));

        Ok(())
    }
}
