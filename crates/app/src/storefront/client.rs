//! GraphQL client for the storefront admin API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::storefront::{StorefrontError, StorefrontGateway};

const FIND_CUSTOMER_QUERY: &str = r"
query findCustomer($query: String!) {
  customers(first: 1, query: $query) {
    edges {
      node {
        id
        tags
      }
    }
  }
}";

const GET_CUSTOMER_QUERY: &str = r"
query getCustomer($id: ID!) {
  customer(id: $id) {
    id
    tags
  }
}";

const CUSTOMER_CREATE_MUTATION: &str = r"
mutation customerCreate($input: CustomerInput!) {
  customerCreate(input: $input) {
    customer {
      id
      tags
    }
    userErrors {
      field
      message
    }
  }
}";

const CUSTOMER_UPDATE_MUTATION: &str = r"
mutation customerUpdate($input: CustomerInput!) {
  customerUpdate(input: $input) {
    customer {
      id
      tags
    }
    userErrors {
      field
      message
    }
  }
}";

/// Configuration for the storefront admin API.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Admin GraphQL endpoint URL.
    pub endpoint: String,

    /// Admin access token, sent on every request.
    pub access_token: String,
}

/// HTTP client for the storefront admin GraphQL API.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    config: StorefrontConfig,
    http: Client,
}

impl StorefrontClient {
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn graphql<T>(&self, query: &str, variables: Value) -> Result<T, StorefrontError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .http
            .post(&self.config.endpoint)
            .header("X-Storefront-Access-Token", &self.config.access_token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(StorefrontError::UnexpectedResponse(format!(
                "graphql request failed with status {status}: {text}"
            )));
        }

        let envelope = response.json::<GraphqlResponse<T>>().await?;

        envelope.data.ok_or_else(|| {
            StorefrontError::UnexpectedResponse("graphql response carried no data".to_string())
        })
    }

    async fn find_customer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CustomerNode>, StorefrontError> {
        let data = self
            .graphql::<CustomerSearchData>(
                FIND_CUSTOMER_QUERY,
                json!({ "query": format!("email:{email}") }),
            )
            .await?;

        Ok(data.customers.edges.into_iter().next().map(|edge| edge.node))
    }

    async fn get_customer(&self, customer_id: &str) -> Result<CustomerNode, StorefrontError> {
        let data = self
            .graphql::<GetCustomerData>(GET_CUSTOMER_QUERY, json!({ "id": customer_id }))
            .await?;

        data.customer.ok_or_else(|| {
            StorefrontError::UnexpectedResponse(format!("customer {customer_id} not found"))
        })
    }

    async fn update_customer_tags(
        &self,
        customer_id: &str,
        tags: Vec<String>,
    ) -> Result<CustomerNode, StorefrontError> {
        let data = self
            .graphql::<CustomerUpdateData>(
                CUSTOMER_UPDATE_MUTATION,
                json!({ "input": { "id": customer_id, "tags": tags } }),
            )
            .await?;

        data.customer_update.into_customer()
    }
}

#[async_trait]
impl StorefrontGateway for StorefrontClient {
    async fn upsert_tagged_customer(
        &self,
        email: &str,
        name: &str,
        tag: &str,
    ) -> Result<String, StorefrontError> {
        if let Some(existing) = self.find_customer_by_email(email).await? {
            if !existing.tags.iter().any(|existing_tag| existing_tag == tag) {
                let mut tags = existing.tags;
                tags.push(tag.to_string());

                self.update_customer_tags(&existing.id, tags).await?;
            }

            return Ok(existing.id);
        }

        let (first_name, last_name) = split_name(name);

        let data = self
            .graphql::<CustomerCreateData>(
                CUSTOMER_CREATE_MUTATION,
                json!({
                    "input": {
                        "firstName": first_name,
                        "lastName": last_name,
                        "email": email,
                        "tags": [tag],
                    }
                }),
            )
            .await?;

        Ok(data.customer_create.into_customer()?.id)
    }

    async fn transition_customer_tag(
        &self,
        customer_id: &str,
        from: &str,
        to: &str,
    ) -> Result<(), StorefrontError> {
        let customer = self.get_customer(customer_id).await?;

        let mut tags: Vec<String> = customer.tags.into_iter().filter(|tag| tag != from).collect();
        tags.push(to.to_string());

        self.update_customer_tags(customer_id, tags).await?;

        Ok(())
    }
}

/// Split a full name into first and last on the first space.
fn split_name(name: &str) -> (&str, &str) {
    let name = name.trim();

    name.split_once(' ')
        .map_or((name, ""), |(first, rest)| (first, rest.trim()))
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct CustomerSearchData {
    customers: CustomerConnection,
}

#[derive(Debug, Deserialize)]
struct CustomerConnection {
    edges: Vec<CustomerEdge>,
}

#[derive(Debug, Deserialize)]
struct CustomerEdge {
    node: CustomerNode,
}

#[derive(Debug, Deserialize)]
struct GetCustomerData {
    customer: Option<CustomerNode>,
}

#[derive(Debug, Deserialize)]
struct CustomerNode {
    id: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomerCreateData {
    customer_create: MutationPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomerUpdateData {
    customer_update: MutationPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MutationPayload {
    customer: Option<CustomerNode>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl MutationPayload {
    fn into_customer(self) -> Result<CustomerNode, StorefrontError> {
        if let Some(error) = self.user_errors.first() {
            return Err(StorefrontError::Rejected(error.message.clone()));
        }

        self.customer.ok_or_else(|| {
            StorefrontError::UnexpectedResponse("mutation returned no customer".to_string())
        })
    }
}

#[derive(Debug, Deserialize)]
struct UserError {
    message: String,
}
