//! Rental Company Options Handler

use std::sync::Arc;

use salvo::prelude::*;

use fleet_app::auth::{Action, ResourceKind};

use crate::{errors::into_status_error, extensions::*, options::OptionsResponse, state::State};

/// Rental Company Options Handler
///
/// Active rental companies as `(uuid, name)` pairs for selection lists.
#[endpoint(
    tags("rental-companies"),
    summary = "Rental Company Options",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OptionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::RentalCompanies, Action::Read)?;

    let options = state
        .app
        .rental_companies
        .list_rental_company_options()
        .await
        .map_err(into_status_error)?;

    Ok(Json(options.into_iter().collect()))
}
