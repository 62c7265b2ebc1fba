//! Submit Registration Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pallet_app::domain::registrations::models::NewRegistration;

use crate::{extensions::*, registrations::errors::into_status_error, state::State};

/// Submit Registration Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmitRegistrationRequest {
    pub name: String,
    pub email: String,
    pub business_details: String,
}

impl From<SubmitRegistrationRequest> for NewRegistration {
    fn from(request: SubmitRegistrationRequest) -> Self {
        NewRegistration {
            name: request.name,
            email: request.email,
            business_details: request.business_details,
        }
    }
}

/// Registration Submitted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegistrationSubmittedResponse {
    /// Created registration UUID
    pub uuid: Uuid,
}

/// Submit Registration Handler
#[endpoint(
    tags("registrations"),
    summary = "Submit Registration",
    responses(
        (status_code = StatusCode::CREATED, description = "Registration submitted"),
        (status_code = StatusCode::CONFLICT, description = "A pending registration already exists for this email"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SubmitRegistrationRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RegistrationSubmittedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = state
        .app
        .registrations
        .submit(json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/registrations/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(RegistrationSubmittedResponse {
        uuid: uuid.into_uuid(),
    }))
}
