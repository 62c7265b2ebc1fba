//! Application database settings.

use clap::Args;

/// `PostgreSQL` connection settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string for the registrations database
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
}
