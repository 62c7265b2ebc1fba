//! Registration Stats Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use pallet_app::domain::registrations::models::RegistrationStats;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegistrationStatsResponse {
    /// Applications received in total
    pub total: u64,

    /// Applications awaiting a decision
    pub pending: u64,

    /// Approved applications
    pub approved: u64,

    /// Rejected applications
    pub rejected: u64,
}

impl From<RegistrationStats> for RegistrationStatsResponse {
    fn from(stats: RegistrationStats) -> Self {
        RegistrationStatsResponse {
            total: stats.total,
            pending: stats.pending,
            approved: stats.approved,
            rejected: stats.rejected,
        }
    }
}

/// Registration Stats Handler
///
/// Returns application counts by lifecycle state.
#[endpoint(tags("registrations"), summary = "Registration Stats")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<RegistrationStatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stats = state
        .app
        .registrations
        .stats()
        .await
        .or_500("failed to fetch registration stats")?;

    Ok(Json(stats.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pallet_app::domain::registrations::{MockRegistrationsService, RegistrationsServiceError};

    use crate::test_helpers::registrations_service;

    use super::*;

    fn make_service(registrations: MockRegistrationsService) -> Service {
        registrations_service(
            registrations,
            Router::with_path("registrations/stats").get(handler),
        )
    }

    #[tokio::test]
    async fn test_stats_returns_counts() -> TestResult {
        let mut registrations = MockRegistrationsService::new();

        registrations.expect_stats().once().return_once(|| {
            Ok(RegistrationStats {
                total: 7,
                pending: 2,
                approved: 4,
                rejected: 1,
            })
        });

        registrations.expect_submit().never();
        registrations.expect_get_registration().never();
        registrations.expect_approve().never();
        registrations.expect_reject().never();
        registrations.expect_list_pending().never();

        let mut res = TestClient::get("http://example.com/registrations/stats")
            .send(&make_service(registrations))
            .await;

        let body: RegistrationStatsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.total, 7);
        assert_eq!(body.pending, 2);
        assert_eq!(body.approved, 4);
        assert_eq!(body.rejected, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_stats_service_error_returns_500() -> TestResult {
        let mut registrations = MockRegistrationsService::new();

        registrations
            .expect_stats()
            .once()
            .return_once(|| Err(RegistrationsServiceError::InvalidData));

        registrations.expect_submit().never();
        registrations.expect_get_registration().never();
        registrations.expect_approve().never();
        registrations.expect_reject().never();
        registrations.expect_list_pending().never();

        let res = TestClient::get("http://example.com/registrations/stats")
            .send(&make_service(registrations))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
