//! HTTP session for the Foreman REST API

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use foreman_api::requests::PowerRequest;
use foreman_api::responses::PageResponse;

use crate::error::{ClientError, Result};
use crate::pages::Pages;

/// Default Foreman server URL
pub const DEFAULT_URL: &str = "https://foreman.na.intgdc.com";

/// Ambient credentials, sent as basic auth when present
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

impl Credentials {
    /// Read `FOREMAN_USERNAME` / `FOREMAN_PASSWORD` from the environment
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("FOREMAN_USERNAME").ok()?;
        let password = std::env::var("FOREMAN_PASSWORD").ok();
        Some(Self { username, password })
    }
}

/// Configuration for a [`Session`]
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Server URL, without the `/api/v2` suffix
    pub base_url: String,
    /// Credentials attached to every request when present
    pub credentials: Option<Credentials>,
    /// Accept self-signed server certificates.
    ///
    /// The internal Foreman deployments this tool targets serve self-signed
    /// certificates, so verification is off by default. Known weakening of
    /// the transport, kept as an explicit setting.
    pub accept_invalid_certs: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            credentials: None,
            accept_invalid_certs: true,
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP session against one Foreman server.
///
/// Owns the base URL, the default headers and the credentials; every request
/// the client makes goes through here. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl Session {
    /// Create a session from a configuration
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json; version=2"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            credentials: config.credentials,
        })
    }

    /// Build the full URL for an `/api/v2` resource
    fn url(&self, resource: &str) -> Result<Url> {
        self.base_url
            .join(&format!("/api/v2/{resource}"))
            .map_err(ClientError::Url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.credentials {
            Some(auth) => builder.basic_auth(&auth.username, auth.password.as_deref()),
            None => builder,
        }
    }

    /// Read a response body, failing on any status other than 200
    async fn success_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// Fetch one page of a listing resource
    pub(crate) async fn fetch_page<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(String, String)],
        page: u64,
    ) -> Result<PageResponse<T>> {
        tracing::debug!(resource, page, "fetching page");
        let mut query = query.to_vec();
        query.push(("page".to_string(), page.to_string()));

        let response = self
            .request(Method::GET, self.url(resource)?)
            .query(&query)
            .send()
            .await?;
        let body = Self::success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch a paged listing as one total count plus a lazy cursor.
    ///
    /// Page 1 is fetched before this returns, so the total is known upfront.
    /// Every later page is fetched only once the cursor runs out of buffered
    /// items; nothing is prefetched. Re-listing requires a fresh `get_all`
    /// call.
    ///
    /// # Errors
    /// Returns an error if the first page cannot be fetched or decoded, or
    /// if the server reports a zero `per_page` for a nonzero `total`.
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(String, String)],
    ) -> Result<(u64, Pages<T>)> {
        let first: PageResponse<T> = self.fetch_page(resource, query, 1).await?;
        let total = first.total;
        let pages = page_count(total, first.per_page)?;
        Ok((
            total,
            Pages::new(self.clone(), resource, query, first.results, pages),
        ))
    }

    /// Run a power operation on a host, returning the raw response body.
    ///
    /// Exactly one PUT to `hosts/{host}/power`; the action string is passed
    /// through to the server unvalidated, so an unknown action comes back as
    /// [`ClientError::Api`].
    ///
    /// # Errors
    /// Returns an error if the request fails or the server answers with a
    /// non-200 status.
    pub async fn power(&self, host: &str, action: &str) -> Result<String> {
        let response = self
            .request(Method::PUT, self.url(&format!("hosts/{host}/power"))?)
            .json(&PowerRequest::new(action))
            .send()
            .await?;
        Self::success_body(response).await
    }
}

/// Number of pages covering `total` results.
///
/// A zero `per_page` alongside a nonzero `total` breaks the paging contract;
/// fail fast instead of dividing by zero.
fn page_count(total: u64, per_page: u64) -> Result<u64> {
    if per_page == 0 {
        if total > 0 {
            return Err(ClientError::InvalidResponse(format!(
                "listing reports {total} results with per_page=0"
            )));
        }
        return Ok(0);
    }
    Ok(total.div_ceil(per_page))
}
