//! Registration Models

use std::str::FromStr;

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Registration UUID
pub type RegistrationUuid = TypedUuid<Registration>;

/// Minimum length of an applicant name, after trimming.
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum length of the business details field, after trimming.
pub const MIN_BUSINESS_DETAILS_LENGTH: usize = 10;

/// A wholesale application, as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub uuid: RegistrationUuid,
    pub name: String,
    pub email: String,
    pub business_details: String,
    pub status: RegistrationStatus,
    pub customer_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub decided_at: Option<Timestamp>,
}

impl Registration {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == RegistrationStatus::Pending
    }
}

/// A wholesale application as submitted by an applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub business_details: String,
}

impl NewRegistration {
    /// Validate the application and normalize its fields.
    ///
    /// Leading and trailing whitespace is trimmed before length checks, and
    /// the trimmed values are what gets stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the name or business details are too short, or
    /// when the email address is not plausibly an email address.
    pub fn validated(self) -> Result<Self, RegistrationValidationError> {
        let name = self.name.trim();

        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(RegistrationValidationError::NameTooShort);
        }

        let email = self.email.trim();

        if !email.contains('@') {
            return Err(RegistrationValidationError::EmailInvalid);
        }

        let business_details = self.business_details.trim();

        if business_details.chars().count() < MIN_BUSINESS_DETAILS_LENGTH {
            return Err(RegistrationValidationError::BusinessDetailsTooShort);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            business_details: business_details.to_string(),
        })
    }
}

/// Why a submitted application was refused before storage.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationValidationError {
    #[error("name must be at least {MIN_NAME_LENGTH} characters long")]
    NameTooShort,

    #[error("a valid email address is required")]
    EmailInvalid,

    #[error("business details must be at least {MIN_BUSINESS_DETAILS_LENGTH} characters long")]
    BusinessDetailsTooShort,
}

/// Lifecycle state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

impl RegistrationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// The storefront customer tag that mirrors this status.
    #[must_use]
    pub const fn customer_tag(self) -> &'static str {
        match self {
            Self::Pending => "wholesale_pending",
            Self::Approved => "wholesale",
            Self::Rejected => "wholesale_rejected",
        }
    }
}

impl FromStr for RegistrationStatus {
    type Err = UnknownRegistrationStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownRegistrationStatusError),
        }
    }
}

/// A stored status column held a value outside the known lifecycle states.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown registration status")]
pub struct UnknownRegistrationStatusError;

/// Registration counts by lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationStats {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn application() -> NewRegistration {
        NewRegistration {
            name: "Jane Wholesale".to_string(),
            email: "jane@example.com".to_string(),
            business_details: "Restocking a retail chain of twelve stores".to_string(),
        }
    }

    #[test]
    fn validated_accepts_a_complete_application() -> TestResult {
        let registration = application().validated()?;

        assert_eq!(registration.name, "Jane Wholesale");
        assert_eq!(registration.email, "jane@example.com");

        Ok(())
    }

    #[test]
    fn validated_trims_whitespace_before_storing() -> TestResult {
        let registration = NewRegistration {
            name: "  Jane Wholesale  ".to_string(),
            email: " jane@example.com ".to_string(),
            business_details: "  Restocking a retail chain of twelve stores  ".to_string(),
        }
        .validated()?;

        assert_eq!(registration.name, "Jane Wholesale");
        assert_eq!(registration.email, "jane@example.com");
        assert_eq!(
            registration.business_details,
            "Restocking a retail chain of twelve stores"
        );

        Ok(())
    }

    #[test]
    fn validated_rejects_short_names() {
        let mut registration = application();
        registration.name = " J ".to_string();

        assert_eq!(
            registration.validated(),
            Err(RegistrationValidationError::NameTooShort)
        );
    }

    #[test]
    fn validated_rejects_emails_without_an_at_sign() {
        let mut registration = application();
        registration.email = "jane.example.com".to_string();

        assert_eq!(
            registration.validated(),
            Err(RegistrationValidationError::EmailInvalid)
        );
    }

    #[test]
    fn validated_rejects_short_business_details() {
        let mut registration = application();
        registration.business_details = "Reselling".to_string();

        assert_eq!(
            registration.validated(),
            Err(RegistrationValidationError::BusinessDetailsTooShort)
        );
    }

    #[test]
    fn statuses_round_trip_through_their_column_text() -> TestResult {
        for status in [
            RegistrationStatus::Pending,
            RegistrationStatus::Approved,
            RegistrationStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<RegistrationStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn unknown_status_text_fails_to_parse() {
        assert_eq!(
            "archived".parse::<RegistrationStatus>(),
            Err(UnknownRegistrationStatusError)
        );
    }

    #[test]
    fn customer_tags_follow_the_lifecycle() {
        assert_eq!(RegistrationStatus::Pending.customer_tag(), "wholesale_pending");
        assert_eq!(RegistrationStatus::Approved.customer_tag(), "wholesale");
        assert_eq!(RegistrationStatus::Rejected.customer_tag(), "wholesale_rejected");
    }
}
