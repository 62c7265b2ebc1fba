//! HTTP client for a `SendGrid`-compatible mail API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::mail::{MailError, MailMessage, Mailer};

/// Configuration for the outbound mail API.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Mail API base URL, e.g. `https://api.sendgrid.com`.
    pub api_base: String,

    /// Mail API key, sent as a bearer token.
    pub api_key: String,

    /// Address outbound mail is sent from.
    pub from_email: String,
}

/// Mailer backed by the mail API's HTTP send endpoint.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    config: MailConfig,
    http: Client,
}

impl HttpMailer {
    #[must_use]
    pub fn new(config: MailConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let url = format!("{}/v3/mail/send", self.config.api_base.trim_end_matches('/'));

        let body = json!({
            "personalizations": [{ "to": [{ "email": message.to }] }],
            "from": { "email": self.config.from_email },
            "subject": message.subject,
            "content": [{ "type": "text/html", "value": message.html_body }],
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(MailError::UnexpectedResponse(format!(
                "mail send failed with status {status}: {text}"
            )));
        }

        Ok(())
    }
}
