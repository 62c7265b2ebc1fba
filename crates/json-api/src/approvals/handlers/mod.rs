//! Approval Handlers

use jiff::Timestamp;
use salvo::prelude::*;

use pallet_app::{
    approvals::token::{ApprovalAction, ApprovalTokenError},
    domain::registrations::{RegistrationsServiceError, models::RegistrationUuid},
};
use tracing::error;

use crate::{approvals::pages, state::State};

pub(crate) mod approve;
pub(crate) mod reject;

/// Verify a one-click link token and apply the decision it authorizes,
/// rendering an HTML result page either way.
async fn decide(state: &State, action: ApprovalAction, token: &str, res: &mut Response) {
    let claims = match state.approvals.verify(token, action, Timestamp::now()) {
        Ok(claims) => claims,
        Err(token_error) => {
            render_token_error(res, &token_error);
            return;
        }
    };

    let registration = RegistrationUuid::from_uuid(claims.registration);

    let outcome = match action {
        ApprovalAction::Approve => state.app.registrations.approve(registration).await,
        ApprovalAction::Reject => state.app.registrations.reject(registration).await,
    };

    match outcome {
        Ok(decided) => {
            let page = match action {
                ApprovalAction::Approve => pages::approved(&decided),
                ApprovalAction::Reject => pages::rejected(&decided),
            };

            res.render(Text::Html(page));
        }
        Err(service_error) => render_decision_error(res, &service_error),
    }
}

fn render_token_error(res: &mut Response, error: &ApprovalTokenError) {
    let (status, title, message) = match error {
        ApprovalTokenError::Expired => (
            StatusCode::GONE,
            "Link Expired",
            "This approval link has expired. Please process the registration from the pending queue instead.",
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            "Invalid Link",
            "This approval link is invalid. Please use the links from the notification email.",
        ),
    };

    res.status_code(status);
    res.render(Text::Html(pages::failure(title, message)));
}

fn render_decision_error(res: &mut Response, error: &RegistrationsServiceError) {
    let (status, title, message) = match error {
        RegistrationsServiceError::NotFound => (
            StatusCode::NOT_FOUND,
            "Registration Not Found",
            "This registration no longer exists.",
        ),
        RegistrationsServiceError::AlreadyProcessed => (
            StatusCode::CONFLICT,
            "Already Processed",
            "This registration has already been processed.",
        ),
        other => {
            error!("failed to apply approval decision: {other}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something Went Wrong",
                "The decision could not be applied. Please try again.",
            )
        }
    };

    res.status_code(status);
    res.render(Text::Html(pages::failure(title, message)));
}
