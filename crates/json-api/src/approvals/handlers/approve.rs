//! Approve Registration Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use pallet_app::approvals::token::ApprovalAction;

use crate::{extensions::*, state::State};

/// Approve Registration Handler
///
/// Verifies a one-click approval link and approves the registration it was
/// issued for, responding with an HTML confirmation page.
#[endpoint(
    tags("approvals"),
    summary = "Approve Registration",
    responses(
        (status_code = StatusCode::OK, description = "Registration approved"),
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

    super::decide(state, ApprovalAction::Approve, &token.into_inner(), res).await;

    Ok(())
}
