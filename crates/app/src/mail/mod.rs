//! Outbound Mail

pub mod client;
pub mod templates;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

pub use client::{HttpMailer, MailConfig};

/// A rendered email, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Errors raised by mail delivery.
#[derive(Debug, Error)]
pub enum MailError {
    /// The HTTP request itself failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The mail API answered with a non-success status.
    #[error("unexpected response from mail API: {0}")]
    UnexpectedResponse(String),
}

#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a single message.
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}
