//! Pending Registrations Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, registrations::get::RegistrationResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegistrationsResponse {
    /// The pending registration queue, newest first
    pub registrations: Vec<RegistrationResponse>,
}

/// Pending Registrations Handler
///
/// Returns the registrations still awaiting a decision.
#[endpoint(tags("registrations"), summary = "List Pending Registrations")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<RegistrationsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let registrations = state
        .app
        .registrations
        .list_pending()
        .await
        .or_500("failed to fetch pending registrations")?;

    Ok(Json(RegistrationsResponse {
        registrations: registrations.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pallet_app::domain::registrations::{
        MockRegistrationsService, RegistrationsServiceError, models::RegistrationUuid,
    };

    use crate::test_helpers::{make_registration, registrations_service};

    use super::*;

    fn make_service(registrations: MockRegistrationsService) -> Service {
        registrations_service(
            registrations,
            Router::with_path("registrations/pending").get(handler),
        )
    }

    #[tokio::test]
    async fn test_pending_returns_empty_queue() -> TestResult {
        let mut registrations = MockRegistrationsService::new();

        registrations
            .expect_list_pending()
            .once()
            .return_once(|| Ok(vec![]));

        registrations.expect_submit().never();
        registrations.expect_get_registration().never();
        registrations.expect_approve().never();
        registrations.expect_reject().never();
        registrations.expect_stats().never();

        let mut res = TestClient::get("http://example.com/registrations/pending")
            .send(&make_service(registrations))
            .await;

        let body: RegistrationsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.registrations.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_pending_returns_queue_in_service_order() -> TestResult {
        let uuid_newer = RegistrationUuid::new();
        let uuid_older = RegistrationUuid::new();

        let mut registrations = MockRegistrationsService::new();

        registrations.expect_list_pending().once().return_once(move || {
            Ok(vec![
                make_registration(uuid_newer),
                make_registration(uuid_older),
            ])
        });

        registrations.expect_submit().never();
        registrations.expect_get_registration().never();
        registrations.expect_approve().never();
        registrations.expect_reject().never();
        registrations.expect_stats().never();

        let body: RegistrationsResponse = TestClient::get("http://example.com/registrations/pending")
            .send(&make_service(registrations))
            .await
            .take_json()
            .await?;

        assert_eq!(body.registrations.len(), 2, "expected two registrations");
        assert_eq!(body.registrations[0].uuid, uuid_newer.into_uuid());
        assert_eq!(body.registrations[1].uuid, uuid_older.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_pending_service_error_returns_500() -> TestResult {
        let mut registrations = MockRegistrationsService::new();

        registrations
            .expect_list_pending()
            .once()
            .return_once(|| Err(RegistrationsServiceError::InvalidData));

        registrations.expect_submit().never();
        registrations.expect_get_registration().never();
        registrations.expect_approve().never();
        registrations.expect_reject().never();
        registrations.expect_stats().never();

        let res = TestClient::get("http://example.com/registrations/pending")
            .send(&make_service(registrations))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
