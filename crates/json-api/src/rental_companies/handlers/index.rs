//! Rental Company Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use fleet_app::auth::{Action, ResourceKind};

use crate::{
    errors::into_status_error, extensions::*, rental_companies::get::RentalCompanyResponse,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RentalCompaniesResponse {
    /// Rental companies ordered by name
    pub rental_companies: Vec<RentalCompanyResponse>,
}

/// Rental Company Index Handler
///
/// Lists active rental companies, or every company with `include_inactive=true`.
#[endpoint(
    tags("rental-companies"),
    summary = "List Rental Companies",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    include_inactive: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<RentalCompaniesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::RentalCompanies, Action::Read)?;

    let companies = state
        .app
        .rental_companies
        .list_rental_companies(include_inactive.into_inner().unwrap_or(false))
        .await
        .map_err(into_status_error)?;

    Ok(Json(RentalCompaniesResponse {
        rental_companies: companies.into_iter().map(Into::into).collect(),
    }))
}
