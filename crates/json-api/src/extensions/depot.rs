//! Depot helper extensions.

use std::any::Any;

use fleet_app::auth::{Action, Decision, Principal, ResourceKind, ResourceScope, authorize};
use salvo::prelude::{Depot, StatusError};
use tracing::debug;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// The principal the auth middleware resolved for this request.
    fn principal_or_401(&self) -> Result<Principal, StatusError>;

    /// The request's principal, provided the access policy lets it perform
    /// `action` on `resource`.
    fn authorize_or_403(
        &self,
        resource: ResourceKind,
        action: Action,
    ) -> Result<Principal, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn principal_or_401(&self) -> Result<Principal, StatusError> {
        self.obtain::<Principal>()
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }

    fn authorize_or_403(
        &self,
        resource: ResourceKind,
        action: Action,
    ) -> Result<Principal, StatusError> {
        let principal = self.principal_or_401()?;

        match authorize(&principal, ResourceScope::new(resource, action)) {
            Decision::Allow => Ok(principal),
            Decision::Deny { reason } => {
                debug!(user_uuid = %principal.uuid, ?resource, %action, reason, "access denied");

                Err(StatusError::forbidden().brief(reason))
            }
        }
    }
}
