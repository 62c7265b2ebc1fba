//! Reject Registration Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use pallet_app::approvals::token::ApprovalAction;

use crate::{extensions::*, state::State};

/// Reject Registration Handler
///
/// Verifies a one-click rejection link and rejects the registration it was
/// issued for, responding with an HTML confirmation page.
#[endpoint(
    tags("approvals"),
    summary = "Reject Registration",
    responses(
        (status_code = StatusCode::OK, description = "Registration rejected"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid approval link"),
        (status_code = StatusCode::GONE, description = "Approval link expired"),
        (status_code = StatusCode::NOT_FOUND, description = "Registration not found"),
        (status_code = StatusCode::CONFLICT, description = "Registration already processed"),
    ),
)]
pub(crate) async fn handler(
    token: QueryParam<String, true>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    super::decide(state, ApprovalAction::Reject, &token.into_inner(), res).await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, ToSpan};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pallet_app::domain::registrations::{
        MockRegistrationsService, RegistrationsServiceError,
        models::{RegistrationStatus, RegistrationUuid},
    };

    use crate::test_helpers::{approval_token, make_registration, registrations_service};

    use super::*;

    fn make_service(registrations: MockRegistrationsService) -> Service {
        registrations_service(
            registrations,
            Router::with_path("approvals/reject").get(handler),
        )
    }

    #[tokio::test]
    async fn test_reject_success_renders_confirmation() -> TestResult {
        let uuid = RegistrationUuid::new();
        let token = approval_token(uuid, ApprovalAction::Reject, Timestamp::now() + 1.hour())?;

        let mut decided = make_registration(uuid);
        decided.status = RegistrationStatus::Rejected;

        let mut registrations = MockRegistrationsService::new();

        registrations
            .expect_reject()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(decided));

        registrations.expect_submit().never();
        registrations.expect_get_registration().never();
        registrations.expect_approve().never();
        registrations.expect_list_pending().never();
        registrations.expect_stats().never();

        let mut res = TestClient::get(format!("http://example.com/approvals/reject?token={token}"))
            .send(&make_service(registrations))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.contains("Application Rejected"));
        assert!(body.contains("jane@example.com"));

        Ok(())
    }

    #[tokio::test]
    async fn test_reject_rejects_an_approve_token_with_400() -> TestResult {
        let uuid = RegistrationUuid::new();
        let token = approval_token(uuid, ApprovalAction::Approve, Timestamp::now() + 1.hour())?;

        let mut registrations = MockRegistrationsService::new();

        registrations.expect_submit().never();
        registrations.expect_get_registration().never();
        registrations.expect_approve().never();
        registrations.expect_reject().never();
        registrations.expect_list_pending().never();
        registrations.expect_stats().never();

        let mut res = TestClient::get(format!("http://example.com/approvals/reject?token={token}"))
            .send(&make_service(registrations))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(body.contains("Invalid Link"));

        Ok(())
    }

    #[tokio::test]
    async fn test_reject_already_processed_returns_409() -> TestResult {
        let uuid = RegistrationUuid::new();
        let token = approval_token(uuid, ApprovalAction::Reject, Timestamp::now() + 1.hour())?;

        let mut registrations = MockRegistrationsService::new();

        registrations
            .expect_reject()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(RegistrationsServiceError::AlreadyProcessed));

        registrations.expect_submit().never();
        registrations.expect_get_registration().never();
        registrations.expect_approve().never();
        registrations.expect_list_pending().never();
        registrations.expect_stats().never();

        let res = TestClient::get(format!("http://example.com/approvals/reject?token={token}"))
            .send(&make_service(registrations))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
