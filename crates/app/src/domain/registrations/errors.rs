//! Registrations service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error as ThisError;

use crate::{
    domain::registrations::models::RegistrationValidationError, storefront::StorefrontError,
};

#[derive(Debug, ThisError)]
pub enum RegistrationsServiceError {
    /// A pending registration already exists for this email address.
    #[error("a pending registration already exists for this email address")]
    AlreadySubmitted,

    /// The registration does not exist.
    #[error("registration not found")]
    NotFound,

    /// The registration was already approved or rejected.
    #[error("this registration has already been processed")]
    AlreadyProcessed,

    /// The submitted application failed validation.
    #[error(transparent)]
    Validation(#[from] RegistrationValidationError),

    /// The storefront customer could not be created or updated.
    #[error("storefront error: {0}")]
    Storefront(#[from] StorefrontError),

    /// A database constraint rejected the data.
    #[error("invalid registration data")]
    InvalidData,

    /// Some other database error occurred.
    #[error("sql error: {0}")]
    Sql(#[source] Error),
}

impl From<Error> for RegistrationsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadySubmitted,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
