//! Client for the Strata Cloud account-management API

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{
    PermissionInput, PermissionRecord, ServiceAccountInput, ServiceAccountKeys,
    ServiceAccountRecord,
};
use crate::{Error, Result};

/// Maximum length of a response body carried in an error message
const MAX_ERROR_BODY_LENGTH: usize = 200;

/// Account-management API operations used by the provider resources.
///
/// Resources receive an implementation at construction time; tests swap in
/// stubs.
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn create_permission(&self, input: &PermissionInput) -> Result<PermissionRecord>;

    async fn get_permission(&self, id: &str) -> Result<PermissionRecord>;

    async fn update_permission(&self, id: &str, input: &PermissionInput)
        -> Result<PermissionRecord>;

    async fn delete_permission(&self, id: &str) -> Result<()>;

    async fn create_service_account(
        &self,
        input: &ServiceAccountInput,
    ) -> Result<ServiceAccountKeys>;

    async fn get_service_account(&self, id: &str) -> Result<ServiceAccountRecord>;

    async fn update_service_account(
        &self,
        id: &str,
        input: &ServiceAccountInput,
    ) -> Result<ServiceAccountRecord>;

    async fn delete_service_account(&self, id: &str) -> Result<()>;
}

/// HTTP client for the account API
///
/// Token acquisition happens outside this crate; the client is handed a
/// ready bearer token and never refreshes it.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("terraform-provider-strata/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse_json<T: DeserializeOwned>(
        kind: &'static str,
        id: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let body = Self::ensure_success(kind, id, response)
            .await?
            .text()
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn ensure_success(
        kind: &'static str,
        id: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                kind,
                id: id.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: excerpt(&body),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl AccountApi for RestClient {
    async fn create_permission(&self, input: &PermissionInput) -> Result<PermissionRecord> {
        let url = self.url("/v2/permissions");
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;
        Self::parse_json("permission", &input.name, response).await
    }

    async fn get_permission(&self, id: &str) -> Result<PermissionRecord> {
        let url = self.url(&format!("/v2/permissions/{}", id));
        debug!("GET {}", url);

        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        Self::parse_json("permission", id, response).await
    }

    async fn update_permission(
        &self,
        id: &str,
        input: &PermissionInput,
    ) -> Result<PermissionRecord> {
        let url = self.url(&format!("/v2/permissions/{}", id));
        debug!("PUT {}", url);

        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;
        Self::parse_json("permission", id, response).await
    }

    async fn delete_permission(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("/v2/permissions/{}", id));
        debug!("DELETE {}", url);

        let response = self.http.delete(&url).bearer_auth(&self.token).send().await?;
        Self::ensure_success("permission", id, response).await?;
        Ok(())
    }

    async fn create_service_account(
        &self,
        input: &ServiceAccountInput,
    ) -> Result<ServiceAccountKeys> {
        let url = self.url("/v2/service-accounts");
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;
        Self::parse_json("service account", &input.name, response).await
    }

    async fn get_service_account(&self, id: &str) -> Result<ServiceAccountRecord> {
        let url = self.url(&format!("/v2/service-accounts/{}", id));
        debug!("GET {}", url);

        let response = self.http.get(&url).bearer_auth(&self.token).send().await?;
        Self::parse_json("service account", id, response).await
    }

    async fn update_service_account(
        &self,
        id: &str,
        input: &ServiceAccountInput,
    ) -> Result<ServiceAccountRecord> {
        let url = self.url(&format!("/v2/service-accounts/{}", id));
        debug!("PUT {}", url);

        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;
        Self::parse_json("service account", id, response).await
    }

    async fn delete_service_account(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("/v2/service-accounts/{}", id));
        debug!("DELETE {}", url);

        let response = self.http.delete(&url).bearer_auth(&self.token).send().await?;
        Self::ensure_success("service account", id, response).await?;
        Ok(())
    }
}

/// Truncate a response body for inclusion in an error message.
fn excerpt(body: &str) -> String {
    if body.chars().count() > MAX_ERROR_BODY_LENGTH {
        let head: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    }
}
