//! Server configuration module

use clap::Parser;

use crate::config::{
    approvals::ApprovalSettings, db::DatabaseConfig, logging::LoggingConfig, mail::MailSettings,
    server::ListenConfig, storefront::StorefrontSettings,
};

pub(crate) mod approvals;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod mail;
pub(crate) mod server;
pub(crate) mod storefront;

/// Pallet JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "pallet-json", about = "Pallet JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ListenConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Storefront Admin API settings.
    #[command(flatten)]
    pub storefront: StorefrontSettings,

    /// Outbound mail settings.
    #[command(flatten)]
    pub mail: MailSettings,

    /// Approval link settings.
    #[command(flatten)]
    pub approvals: ApprovalSettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
