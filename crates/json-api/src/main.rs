//! Pallet JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use pallet_app::{
    approvals::{
        links::ApprovalLinkBuilder,
        token::{ApprovalSigningKey, ApprovalTokenVerifier},
    },
    context::AppContext,
    mail::{HttpMailer, MailConfig},
    storefront::{StorefrontClient, StorefrontConfig},
};

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod approvals;
mod config;
mod discounts;
mod extensions;
mod healthcheck;
mod logging;
mod registrations;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Pallet JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    if let Err(init_error) = logging::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so eprintln is all that is left"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let signing_key = ApprovalSigningKey::from_secret(&config.approvals.approval_signing_key);

    let storefront = Arc::new(StorefrontClient::new(StorefrontConfig {
        endpoint: config.storefront.storefront_endpoint,
        access_token: config.storefront.storefront_access_token,
    }));

    let mailer = Arc::new(HttpMailer::new(MailConfig {
        api_base: config.mail.mail_api_base,
        api_key: config.mail.mail_api_key,
        from_email: config.mail.from_email,
    }));

    let links = ApprovalLinkBuilder::new(signing_key.clone(), config.approvals.public_base_url)
        .with_ttl_hours(config.approvals.approval_link_ttl_hours);

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        storefront,
        mailer,
        links,
        config.mail.merchant_email,
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let verifier = ApprovalTokenVerifier::new(signing_key);

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app, verifier)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(router::app_router());

    let doc = OpenApi::new("Pallet API", "0.1.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
