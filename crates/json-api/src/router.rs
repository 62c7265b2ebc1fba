//! App Router

use salvo::Router;

use crate::{approvals, discounts, registrations};

pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("discounts/run").post(discounts::run::handler))
        .push(
            Router::with_path("registrations")
                .post(registrations::submit::handler)
                .push(Router::with_path("pending").get(registrations::pending::handler))
                .push(Router::with_path("stats").get(registrations::stats::handler))
                .push(Router::with_path("{registration}").get(registrations::get::handler)),
        )
        .push(
            Router::with_path("approvals")
                .push(Router::with_path("approve").get(approvals::approve::handler))
                .push(Router::with_path("reject").get(approvals::reject::handler)),
        )
}
