//! Registration Errors

use salvo::http::StatusError;
use tracing::error;

use pallet_app::domain::registrations::RegistrationsServiceError;

pub(crate) fn into_status_error(error: RegistrationsServiceError) -> StatusError {
    match error {
        RegistrationsServiceError::AlreadySubmitted => {
            StatusError::conflict().brief("A pending registration already exists for this email")
        }
        RegistrationsServiceError::AlreadyProcessed => {
            StatusError::conflict().brief("This registration has already been processed")
        }
        RegistrationsServiceError::Validation(validation) => {
            StatusError::bad_request().brief(validation.to_string())
        }
        RegistrationsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid registration payload")
        }
        RegistrationsServiceError::NotFound => {
            error!("registration not found");

            StatusError::not_found()
        }
        RegistrationsServiceError::Storefront(source) => {
            error!("storefront call failed: {source}");

            StatusError::internal_server_error()
        }
        RegistrationsServiceError::Sql(source) => {
            error!("registration query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
