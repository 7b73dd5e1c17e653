//! Get Rental Company Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleet_app::{
    auth::{Action, ResourceKind},
    domain::rental_companies::records::RentalCompanyRecord,
};

use crate::{errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RentalCompanyResponse {
    /// The unique identifier of the rental company
    pub uuid: Uuid,

    /// Company name, unique among active companies
    pub name: String,

    pub contact_email: Option<String>,

    pub phone: Option<String>,

    /// `false` once the company has been removed
    pub is_active: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<RentalCompanyRecord> for RentalCompanyResponse {
    fn from(company: RentalCompanyRecord) -> Self {
        RentalCompanyResponse {
            uuid: company.uuid.into(),
            name: company.name,
            contact_email: company.contact_email,
            phone: company.phone,
            is_active: company.is_active,
            created_at: company.created_at.to_string(),
            updated_at: company.updated_at.to_string(),
        }
    }
}

/// Get Rental Company Handler
///
/// Returns a rental company, whether or not it has been removed.
#[endpoint(
    tags("rental-companies"),
    summary = "Get Rental Company",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Rental company found"),
        (status_code = StatusCode::NOT_FOUND, description = "Rental company not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RentalCompanyResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(ResourceKind::RentalCompanies, Action::Read)?;

    let company = state
        .app
        .rental_companies
        .get_rental_company(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(company.into()))
}
