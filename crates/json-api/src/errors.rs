//! Resource Errors

use salvo::http::StatusError;
use tracing::error;

use fleet_app::{domain::lifecycle::ResourceError, validation::summary};

/// Translate a lifecycle failure into the HTTP error the client sees.
pub(crate) fn into_status_error(error: ResourceError) -> StatusError {
    match error {
        ResourceError::Conflict { .. } => StatusError::conflict().brief(error.to_string()),
        ResourceError::NotFound { .. } => StatusError::not_found().brief(error.to_string()),
        ResourceError::Invalid { resource, errors } => StatusError::unprocessable_entity()
            .brief(format!("Invalid {resource}"))
            .detail(summary(&errors)),
        ResourceError::InvalidReference => {
            StatusError::bad_request().brief("Referenced record does not exist")
        }
        ResourceError::MissingRequiredData | ResourceError::InvalidData => {
            StatusError::bad_request().brief("Invalid payload")
        }
        ResourceError::Sql(source) => {
            error!("storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use fleet_app::{
        domain::{cars::records::CarRecord, lifecycle::Resource},
        validation::{ValidationError, ValidationErrors},
    };
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn lifecycle_signals_map_to_client_errors() {
        let cases = [
            (ResourceError::conflict::<CarRecord>(), StatusCode::CONFLICT),
            (ResourceError::not_found::<CarRecord>(), StatusCode::NOT_FOUND),
            (ResourceError::InvalidReference, StatusCode::BAD_REQUEST),
            (ResourceError::MissingRequiredData, StatusCode::BAD_REQUEST),
            (ResourceError::InvalidData, StatusCode::BAD_REQUEST),
        ];

        for (error, status) in cases {
            assert_eq!(into_status_error(error).code, status);
        }
    }

    #[test]
    fn validation_failures_carry_field_details() {
        let mut errors = ValidationErrors::new();

        errors.add(
            "license_plate",
            ValidationError::new("blank").with_message("must not be blank".into()),
        );

        let status = into_status_error(ResourceError::invalid::<CarRecord>(errors));

        assert_eq!(status.code, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status.brief, format!("Invalid {}", CarRecord::NAME));
        assert!(
            status
                .detail
                .is_some_and(|detail| detail == "license_plate: must not be blank"),
            "expected the field name in the detail"
        );
    }
}
