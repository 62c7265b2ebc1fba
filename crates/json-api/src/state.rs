//! State

use std::sync::Arc;

use pallet::policy::WholesalePolicy;
use pallet_app::{approvals::token::ApprovalTokenVerifier, context::AppContext};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) policy: WholesalePolicy,
    pub(crate) approvals: ApprovalTokenVerifier,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        app: AppContext,
        policy: WholesalePolicy,
        approvals: ApprovalTokenVerifier,
    ) -> Self {
        Self {
            app,
            policy,
            approvals,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, approvals: ApprovalTokenVerifier) -> Arc<Self> {
        Arc::new(Self::new(app, WholesalePolicy::default(), approvals))
    }
}
