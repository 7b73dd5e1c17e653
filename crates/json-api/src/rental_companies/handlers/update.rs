//! Update Rental Company Handler

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
    domain::rental_companies::data::RentalCompanyUpdate,
};

use crate::{
    errors::into_status_error, extensions::*, rental_companies::get::RentalCompanyResponse,
    state::State,
};

/// Update Rental Company Request
///
/// Omitted fields keep their stored value. `null` clears `contact_email`
/// and `phone`.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateRentalCompanyRequest {
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[salvo(schema(value_type = Option<String>))]
    pub contact_email: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[salvo(schema(value_type = Option<String>))]
    pub phone: Option<Option<String>>,
    /// `true` reactivates a removed company, `false` removes it
    pub is_active: Option<bool>,
}

impl From<UpdateRentalCompanyRequest> for RentalCompanyUpdate {
    fn from(request: UpdateRentalCompanyRequest) -> Self {
        RentalCompanyUpdate {
            name: request.name,
            contact_email: request.contact_email,
            phone: request.phone,
            is_active: request.is_active,
        }
    }
}

/// Update Rental Company Handler
#[endpoint(
    tags("rental-companies"),
    summary = "Update Rental Company",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Rental company updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Rental company not found"),
        (status_code = StatusCode::CONFLICT, description = "An active rental company already has this name"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Validation failed"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
    ),
)]
#[tracing::instrument(
    name = "rental_companies.update",
    skip(uuid, json, depot),
    fields(user_uuid = tracing::field::Empty, rental_company_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateRentalCompanyRequest>,
    depot: &mut Depot,
) -> Result<Json<RentalCompanyResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.authorize_or_403(ResourceKind::RentalCompanies, Action::Update)?;
    let uuid = uuid.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(principal.uuid));
    span.record("rental_company_uuid", tracing::field::display(uuid));

    let company = state
        .app
        .rental_companies
        .update_rental_company(uuid.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(company.into()))
}
