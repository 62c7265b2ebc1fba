//! Handler extension traits.

use std::{any::Any, fmt::Display};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Fetch a shared value from the depot, failing the request when absent.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        let Ok(value) = self.obtain::<T>() else {
            error!("depot is missing a required shared value");

            return Err(StatusError::internal_server_error());
        };

        Ok(value)
    }
}

/// Log any error and turn it into an internal server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!(error = %error, "{context}");

            StatusError::internal_server_error()
        })
    }
}
