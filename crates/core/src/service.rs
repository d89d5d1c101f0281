use std::time::Duration;

use anyhow::Result;
use reqwest::Method;

use ibmcloud_auth::Credentials;
use ibmcloud_config::ConfigSource;

use crate::error::ServiceError;
use crate::headers::HeaderStore;

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Shared base embedded by every service client. Holds the resolved
/// credentials, the service URL and version date, the custom request
/// headers, and the HTTP client requests are built against.
pub struct BaseService {
    service_id: String,
    version: Option<String>,
    credentials: Option<Credentials>,
    url: Option<String>,
    custom_headers: HeaderStore,
    client: reqwest::Client,
}

impl BaseService {
    /// Construct with full credential resolution (credentials file plus
    /// process environment). Without any credentials file the client comes
    /// up unauthenticated; unusable credentials abort construction.
    pub fn new(service_id: &str) -> Result<Self> {
        let credentials = ibmcloud_auth::resolve_credentials(service_id)?;
        Ok(Self::assemble(service_id, credentials))
    }

    /// Construct against an explicit configuration source, as if a
    /// credentials file had been found there.
    pub fn with_source(service_id: &str, source: &impl ConfigSource) -> Result<Self> {
        let credentials = ibmcloud_auth::resolve_from_source(service_id, source, None)?;
        Ok(Self::assemble(service_id, Some(credentials)))
    }

    /// Construct with pre-built credentials, bypassing resolution.
    pub fn from_credentials(service_id: &str, credentials: Credentials) -> Self {
        Self::assemble(service_id, Some(credentials))
    }

    /// Set the version date sent as the `version` query parameter.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    fn assemble(service_id: &str, credentials: Option<Credentials>) -> Self {
        Self {
            service_id: service_id.to_string(),
            version: None,
            credentials,
            url: None,
            custom_headers: HeaderStore::new(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn service_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_service_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// Add one custom header to every outgoing request, replacing any
    /// previous value under the same name.
    pub fn with_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.custom_headers.upsert(name, value);
    }

    pub fn with_headers<I, K, V>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.custom_headers.upsert_all(headers);
    }

    pub fn clear_custom_request_headers(&mut self) {
        self.custom_headers.clear();
    }

    pub fn custom_headers(&self) -> &HeaderStore {
        &self.custom_headers
    }

    /// Build a request against the service: base URL joined with `path`,
    /// the version date as a query parameter when set, and the custom
    /// headers applied. Sending is up to the caller.
    pub fn request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, ServiceError> {
        let base = self
            .effective_url()
            .ok_or_else(|| ServiceError::MissingServiceUrl {
                service_id: self.service_id.clone(),
            })?;
        let url = join_url(base, path);
        tracing::debug!("{method} {url}");

        let mut builder = self
            .client
            .request(method, url)
            .headers(self.custom_headers.to_header_map()?);
        if let Some(version) = &self.version {
            builder = builder.query(&[("version", version.as_str())]);
        }
        Ok(builder)
    }

    /// The URL requests go to: the credentials' URL when resolution
    /// produced one, otherwise whatever was set on the client.
    fn effective_url(&self) -> Option<&str> {
        self.credentials
            .as_ref()
            .and_then(|c| c.url.as_deref())
            .or(self.url.as_deref())
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
