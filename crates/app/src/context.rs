//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    approvals::links::ApprovalLinkBuilder,
    database::{self, Db},
    domain::registrations::{PgRegistrationsService, RegistrationsService},
    mail::Mailer,
    storefront::StorefrontGateway,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub registrations: Arc<dyn RegistrationsService>,
}

impl AppContext {
    /// Build application context from a database URL and its collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        storefront: Arc<dyn StorefrontGateway>,
        mailer: Arc<dyn Mailer>,
        links: ApprovalLinkBuilder,
        merchant_email: String,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            registrations: Arc::new(PgRegistrationsService::new(
                db,
                storefront,
                mailer,
                links,
                merchant_email,
            )),
        })
    }
}
