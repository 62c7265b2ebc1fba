//! Mail Config

use clap::Args;

/// Outbound mail settings.
#[derive(Debug, Args)]
pub struct MailSettings {
    /// Mail API base URL
    #[arg(long, env = "MAIL_API_BASE", default_value = "https://api.sendgrid.com")]
    pub mail_api_base: String,

    /// Mail API key
    #[arg(long, env = "MAIL_API_KEY", hide_env_values = true)]
    pub mail_api_key: String,

    /// Address notification emails are sent from
    #[arg(long, env = "FROM_EMAIL")]
    pub from_email: String,

    /// Merchant address that receives new registration notifications
    #[arg(long, env = "MERCHANT_EMAIL")]
    pub merchant_email: String,
}
