//! Delete Rental Company Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use fleet_app::auth::{Action, ResourceKind};

use crate::{
    errors::into_status_error, extensions::*, rental_companies::get::RentalCompanyResponse,
    state::State,
};

/// Delete Rental Company Handler
///
/// Marks the company inactive and returns it; its name becomes free for reuse.
#[endpoint(
    tags("rental-companies"),
    summary = "Delete Rental Company",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Rental company deactivated"),
        (status_code = StatusCode::NOT_FOUND, description = "Rental company not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RentalCompanyResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::RentalCompanies, Action::Delete)?;

    let company = state
        .app
        .rental_companies
        .remove_rental_company(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(company.into()))
}
