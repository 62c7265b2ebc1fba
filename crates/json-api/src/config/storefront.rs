//! Storefront Config

use clap::Args;

/// Storefront Admin API settings.
#[derive(Debug, Args)]
pub struct StorefrontSettings {
    /// Storefront Admin GraphQL endpoint
    #[arg(long, env = "STOREFRONT_ENDPOINT")]
    pub storefront_endpoint: String,

    /// Storefront Admin API access token
    #[arg(long, env = "STOREFRONT_ACCESS_TOKEN", hide_env_values = true)]
    pub storefront_access_token: String,
}
