//! Get User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::users::records::{Department, Role, UserRecord},
};

use crate::{errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub uuid: Uuid,

    pub email: String,

    pub name: String,

    /// One of `admin`, `fleet_manager`, `mechanic`, `driver`
    #[salvo(schema(value_type = String))]
    pub role: Role,

    /// One of `administration`, `operations`, `maintenance`
    #[salvo(schema(value_type = String))]
    pub department: Department,

    pub is_active: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        UserResponse {
            uuid: user.uuid.into(),
            email: user.email,
            name: user.name,
            role: user.role,
            department: user.department,
            is_active: user.is_active,
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.to_string(),
        }
    }
}

/// Get User Handler
#[endpoint(
    tags("users"),
    summary = "Get User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User found"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::Users, Action::Read)?;

    let user = state
        .app
        .users
        .get_user(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
