//! Update User Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::users::{
        data::UserUpdate,
        records::{Department, Role},
    },
};

use crate::{errors::into_status_error, extensions::*, state::State, users::get::UserResponse};

/// Update User Request
///
/// Tokens cannot be changed here; issue a new user from the CLI instead.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    #[salvo(schema(value_type = Option<String>))]
    pub role: Option<Role>,
    #[salvo(schema(value_type = Option<String>))]
    pub department: Option<Department>,
    pub is_active: Option<bool>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        UserUpdate {
            email: request.email,
            name: request.name,
            role: request.role,
            department: request.department,
            is_active: request.is_active,
        }
    }
}

/// Update User Handler
#[endpoint(
    tags("users"),
    summary = "Update User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User updated"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::CONFLICT, description = "An active user already has this e-mail"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
#[tracing::instrument(
    name = "users.update",
    skip(uuid, json, depot),
    fields(user_uuid = tracing::field::Empty, target_user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateUserRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.authorize_or_403(ResourceKind::Users, Action::Update)?;
    let uuid = uuid.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(principal.uuid));
    span.record("target_user_uuid", tracing::field::display(uuid));

    let user = state
        .app
        .users
        .update_user(uuid.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use fleet_app::domain::{
        lifecycle::ResourceError,
        users::{MockUsersService, records::UserUuid},
    };

    use crate::test_helpers::{admin, principal, users_service_as};

    use super::{super::tests::make_user, *};

    fn route() -> Router {
        Router::with_path("users/{uuid}").put(handler)
    }

    #[tokio::test]
    async fn test_admins_promote_users() -> TestResult {
        let uuid = UserUuid::new();

        let mut user = make_user(uuid, "dana@fleet.example");

        user.role = Role::FleetManager;
        user.department = Department::Administration;

        let mut repo = MockUsersService::new();

        repo.expect_update_user()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == UserUpdate {
                            role: Some(Role::FleetManager),
                            department: Some(Department::Administration),
                            ..UserUpdate::default()
                        }
            })
            .return_once(move |_, _| Ok(user));

        let mut res = TestClient::put(format!("http://example.com/users/{uuid}"))
            .json(&json!({ "role": "fleet_manager", "department": "administration" }))
            .send(&users_service_as(admin(), repo, route()))
            .await;

        let body: UserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.role, Role::FleetManager);
        assert_eq!(body.department, Department::Administration);

        Ok(())
    }

    #[tokio::test]
    async fn test_taken_email_returns_409() -> TestResult {
        let mut repo = MockUsersService::new();

        repo.expect_update_user().once().return_once(|_, _| {
            Err(ResourceError::Conflict {
                resource: "user",
                key: "email",
            })
        });

        let res = TestClient::put(format!("http://example.com/users/{}", Uuid::now_v7()))
            .json(&json!({ "email": "taken@fleet.example" }))
            .send(&users_service_as(admin(), repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_fleet_managers_cannot_change_users() -> TestResult {
        let mut repo = MockUsersService::new();

        repo.expect_update_user().never();

        let res = TestClient::put(format!("http://example.com/users/{}", Uuid::now_v7()))
            .json(&json!({ "role": "admin" }))
            .send(&users_service_as(
                principal(Role::FleetManager, Department::Administration),
                repo,
                route(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
