use std::sync::Arc;

use clap::{Args, Subcommand};
use pallet_app::{
    approvals::{links::ApprovalLinkBuilder, token::ApprovalSigningKey},
    context::AppContext,
    mail::{HttpMailer, MailConfig},
    storefront::{StorefrontClient, StorefrontConfig},
};

mod decide;
mod list;
mod stats;

#[derive(Debug, Args)]
pub(crate) struct RegistrationsCommand {
    #[command(subcommand)]
    command: RegistrationsSubcommand,
}

#[derive(Debug, Subcommand)]
enum RegistrationsSubcommand {
    List(list::ListArgs),
    Stats(stats::StatsArgs),
    Decide(decide::DecideArgs),
}

pub(crate) async fn run(command: RegistrationsCommand) -> Result<(), String> {
    match command.command {
        RegistrationsSubcommand::List(args) => list::run(args).await,
        RegistrationsSubcommand::Stats(args) => stats::run(args).await,
        RegistrationsSubcommand::Decide(args) => decide::run(args).await,
    }
}

/// Connection settings shared by registration commands.
#[derive(Debug, Args)]
pub(crate) struct ServiceArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Storefront admin GraphQL endpoint
    #[arg(long, env = "STOREFRONT_ENDPOINT")]
    storefront_endpoint: String,

    /// Storefront admin access token
    #[arg(long, env = "STOREFRONT_ACCESS_TOKEN", hide_env_values = true)]
    storefront_access_token: String,

    /// Mail API base URL
    #[arg(long, env = "MAIL_API_BASE", default_value = "https://api.sendgrid.com")]
    mail_api_base: String,

    /// Mail API key
    #[arg(long, env = "MAIL_API_KEY", hide_env_values = true)]
    mail_api_key: String,

    /// Address outbound mail is sent from
    #[arg(long, env = "FROM_EMAIL")]
    from_email: String,

    /// Merchant address notified of new applications
    #[arg(long, env = "MERCHANT_EMAIL")]
    merchant_email: String,

    /// Secret used to sign one-click decision links
    #[arg(long, env = "APPROVAL_SIGNING_KEY", hide_env_values = true)]
    approval_signing_key: String,

    /// Public base URL decision links are rooted at
    #[arg(long, env = "PUBLIC_BASE_URL")]
    public_base_url: String,
}

impl ServiceArgs {
    pub(crate) async fn build_context(self) -> Result<AppContext, String> {
        let storefront = Arc::new(StorefrontClient::new(StorefrontConfig {
            endpoint: self.storefront_endpoint,
            access_token: self.storefront_access_token,
        }));

        let mailer = Arc::new(HttpMailer::new(MailConfig {
            api_base: self.mail_api_base,
            api_key: self.mail_api_key,
            from_email: self.from_email,
        }));

        let links = ApprovalLinkBuilder::new(
            ApprovalSigningKey::from_secret(&self.approval_signing_key),
            self.public_base_url,
        );

        AppContext::from_database_url(
            &self.database_url,
            storefront,
            mailer,
            links,
            self.merchant_email,
        )
        .await
        .map_err(|error| format!("failed to initialize app context: {error}"))
    }
}
