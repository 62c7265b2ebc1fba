//! One-click decision links embedded in merchant notifications.

use jiff::{Span, Timestamp};
use uuid::Uuid;

use crate::approvals::token::{
    ApprovalAction, ApprovalClaims, ApprovalSigningKey, ApprovalTokenError, issue_approval_token,
};

/// How long decision links stay valid by default: 7 days.
pub const DEFAULT_LINK_TTL_HOURS: i64 = 24 * 7;

/// Both decision links for a single registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionLinks {
    pub approve_url: String,
    pub reject_url: String,
}

/// Builds signed approve and reject URLs rooted at the public base URL.
#[derive(Debug, Clone)]
pub struct ApprovalLinkBuilder {
    key: ApprovalSigningKey,
    base_url: String,
    ttl_hours: i64,
}

impl ApprovalLinkBuilder {
    #[must_use]
    pub fn new(key: ApprovalSigningKey, base_url: impl Into<String>) -> Self {
        Self {
            key,
            base_url: base_url.into(),
            ttl_hours: DEFAULT_LINK_TTL_HOURS,
        }
    }

    #[must_use]
    pub fn with_ttl_hours(mut self, ttl_hours: i64) -> Self {
        self.ttl_hours = ttl_hours;
        self
    }

    /// Build both decision links for a registration.
    ///
    /// # Errors
    ///
    /// Returns an error when the expiry cannot be computed or a token cannot
    /// be signed.
    pub fn decision_links(
        &self,
        registration: Uuid,
        now: Timestamp,
    ) -> Result<DecisionLinks, ApprovalTokenError> {
        Ok(DecisionLinks {
            approve_url: self.link(registration, ApprovalAction::Approve, now)?,
            reject_url: self.link(registration, ApprovalAction::Reject, now)?,
        })
    }

    fn link(
        &self,
        registration: Uuid,
        action: ApprovalAction,
        now: Timestamp,
    ) -> Result<String, ApprovalTokenError> {
        let expires_at = now
            .checked_add(Span::new().hours(self.ttl_hours))
            .map_err(|_| ApprovalTokenError::ExpiryOutOfRange)?;

        let token = issue_approval_token(
            &self.key,
            &ApprovalClaims {
                registration,
                action,
                expires_at,
            },
        )?;

        Ok(format!(
            "{}/approvals/{}?token={token}",
            self.base_url.trim_end_matches('/'),
            action.segment()
        ))
    }
}
