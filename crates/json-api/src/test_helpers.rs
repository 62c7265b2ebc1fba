//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use pallet::policy::WholesalePolicy;
use pallet_app::{
    approvals::token::{
        ApprovalAction, ApprovalClaims, ApprovalSigningKey, ApprovalTokenError,
        ApprovalTokenVerifier, issue_approval_token,
    },
    context::AppContext,
    domain::registrations::{
        MockRegistrationsService,
        models::{Registration, RegistrationStatus, RegistrationUuid},
    },
};

use crate::state::State;

pub(crate) const TEST_SIGNING_SECRET: &str = "test-approval-signing-secret";

pub(crate) fn make_registration(uuid: RegistrationUuid) -> Registration {
    Registration {
        uuid,
        name: "Jane Wholesale".to_string(),
        email: "jane@example.com".to_string(),
        business_details: "Reselling to regional garden centres.".to_string(),
        status: RegistrationStatus::Pending,
        customer_id: Some("gid://shop/Customer/1".to_string()),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        decided_at: None,
    }
}

pub(crate) fn approval_token(
    registration: RegistrationUuid,
    action: ApprovalAction,
    expires_at: Timestamp,
) -> Result<String, ApprovalTokenError> {
    issue_approval_token(
        &ApprovalSigningKey::from_secret(TEST_SIGNING_SECRET),
        &ApprovalClaims {
            registration: registration.into_uuid(),
            action,
            expires_at,
        },
    )
}

pub(crate) fn state_with_registrations(registrations: MockRegistrationsService) -> Arc<State> {
    Arc::new(State::new(
        AppContext {
            registrations: Arc::new(registrations),
        },
        WholesalePolicy::default(),
        ApprovalTokenVerifier::new(ApprovalSigningKey::from_secret(TEST_SIGNING_SECRET)),
    ))
}

pub(crate) fn registrations_service(
    registrations: MockRegistrationsService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_registrations(registrations)))
            .push(route),
    )
}
