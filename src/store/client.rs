use crate::{
    error::{Result, RosterError},
    model::{Company, NewUser, User, UserPatch},
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

const USERS: &str = "users";
const COMPANIES: &str = "companies";

#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    base_url: Url,
}

impl StoreClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(RosterError::Config(format!(
                "store URL must be an http(s) URL, got '{}'",
                base_url
            )));
        }

        // Fails only when a provider is already installed
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = Client::builder()
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_user(&self, id: &str) -> Result<User> {
        let url = self.url(&[USERS, id])?;
        self.fetch(self.http.get(url)).await
    }

    pub async fn get_company(&self, id: &str) -> Result<Company> {
        let url = self.url(&[COMPANIES, id])?;
        self.fetch(self.http.get(url)).await
    }

    /// Users whose `companyId` equals `company_id`, in store order.
    pub async fn company_users(&self, company_id: &str) -> Result<Vec<User>> {
        let url = self.url(&[COMPANIES, company_id, USERS])?;
        self.fetch(self.http.get(url)).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User> {
        let url = self.url(&[USERS])?;
        self.fetch(self.http.post(url).json(user)).await
    }

    pub async fn update_user(&self, patch: &UserPatch) -> Result<User> {
        let url = self.url(&[USERS, patch.id.as_str()])?;
        self.fetch(self.http.patch(url).json(patch)).await
    }

    /// Delete a user. Returns the deleted record only when the store sends one back.
    pub async fn delete_user(&self, id: &str) -> Result<Option<User>> {
        let url = self.url(&[USERS, id])?;
        let body = self.send(self.http.delete(url)).await?.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value: serde_json::Value = serde_json::from_slice(&body)?;
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(ref map) if map.is_empty() => Ok(None),
            other => Ok(Some(serde_json::from_value(other)?)),
        }
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RosterError::Config(format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.send(request).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().to_string();
        tracing::debug!(%method, %url, "Store request");

        let response = self.http.execute(request).await.inspect_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Store unreachable");
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%method, %url, %status, "Store rejected request");
            return Err(RosterError::Status {
                method,
                url,
                status,
            });
        }
        Ok(response)
    }
}
