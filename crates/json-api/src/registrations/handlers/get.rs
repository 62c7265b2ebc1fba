//! Get Registration Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pallet_app::domain::registrations::models::Registration;

use crate::{extensions::*, registrations::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegistrationResponse {
    /// The unique identifier of the registration
    pub uuid: Uuid,

    /// Applicant name
    pub name: String,

    /// Applicant email address
    pub email: String,

    /// What the applicant intends to do with wholesale access
    pub business_details: String,

    /// Lifecycle status (pending, approved, rejected)
    pub status: String,

    /// Storefront customer the application is linked to
    pub customer_id: Option<String>,

    /// The date and time the application was submitted
    pub created_at: String,

    /// The date and time the application was last updated
    pub updated_at: String,

    /// The date and time the application was decided
    pub decided_at: Option<String>,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        RegistrationResponse {
            uuid: registration.uuid.into_uuid(),
            name: registration.name,
            email: registration.email,
            business_details: registration.business_details,
            status: registration.status.as_str().to_string(),
            customer_id: registration.customer_id,
            created_at: registration.created_at.to_string(),
            updated_at: registration.updated_at.to_string(),
            decided_at: registration.decided_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Registration Handler
///
/// Returns a registration.
#[endpoint(tags("registrations"), summary = "Get Registration")]
pub(crate) async fn handler(
    registration: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RegistrationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let registration = state
        .app
        .registrations
        .get_registration(registration.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(registration.into()))
}
