//! Storefront Customer Gateway

pub mod client;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

pub use client::{StorefrontClient, StorefrontConfig};

/// Errors raised by the storefront admin API.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The HTTP request itself failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The storefront refused the mutation with a user error.
    #[error("storefront rejected the request: {0}")]
    Rejected(String),

    /// The storefront answered with a non-success status or an unusable body.
    #[error("unexpected response from storefront: {0}")]
    UnexpectedResponse(String),
}

#[automock]
#[async_trait]
pub trait StorefrontGateway: Send + Sync {
    /// Ensure a customer exists for the applicant and carries `tag`.
    ///
    /// Returns the storefront customer id.
    async fn upsert_tagged_customer(
        &self,
        email: &str,
        name: &str,
        tag: &str,
    ) -> Result<String, StorefrontError>;

    /// Replace `from` with `to` in a customer's tags, keeping every other tag.
    async fn transition_customer_tag(
        &self,
        customer_id: &str,
        from: &str,
        to: &str,
    ) -> Result<(), StorefrontError>;
}
