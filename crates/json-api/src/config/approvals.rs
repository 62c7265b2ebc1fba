//! Approvals Config

use clap::Args;

use pallet_app::approvals::links::DEFAULT_LINK_TTL_HOURS;

/// Approval link settings.
#[derive(Debug, Args)]
pub struct ApprovalSettings {
    /// Secret the one-click approval links are signed with
    #[arg(long, env = "APPROVAL_SIGNING_KEY", hide_env_values = true)]
    pub approval_signing_key: String,

    /// Public base URL approval links are rooted at
    #[arg(long, env = "PUBLIC_BASE_URL")]
    pub public_base_url: String,

    /// Hours before an approval link expires
    #[arg(long, env = "APPROVAL_LINK_TTL_HOURS", default_value_t = DEFAULT_LINK_TTL_HOURS)]
    pub approval_link_ttl_hours: i64,
}
