//! Create Rental Company Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::rental_companies::data::NewRentalCompany,
};

use crate::{
    errors::into_status_error, extensions::*, rental_companies::get::RentalCompanyResponse,
    state::State,
};

/// Create Rental Company Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRentalCompanyRequest {
    pub name: String,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
}

impl From<CreateRentalCompanyRequest> for NewRentalCompany {
    fn from(request: CreateRentalCompanyRequest) -> Self {
        NewRentalCompany {
            name: request.name,
            contact_email: request.contact_email,
            phone: request.phone,
            is_active: request.is_active.unwrap_or(true),
        }
    }
}

/// Create Rental Company Handler
#[endpoint(
    tags("rental-companies"),
    summary = "Create Rental Company",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Rental company created"),
        (status_code = StatusCode::CONFLICT, description = "An active rental company already has this name"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRentalCompanyRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RentalCompanyResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::RentalCompanies, Action::Create)?;

    let company = state
        .app
        .rental_companies
        .create_rental_company(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/rental-companies/{}", company.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(company.into()))
}
