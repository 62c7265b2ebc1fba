//! Server listen settings.

use clap::Args;

/// Network settings for the HTTP listener.
#[derive(Debug, Args)]
pub struct ListenConfig {
    /// Address the server binds to
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the server listens on
    #[arg(short, long, env = "SERVER_PORT", default_value = "8712")]
    pub port: u16,
}

impl ListenConfig {
    /// The `host:port` pair the server binds to.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
