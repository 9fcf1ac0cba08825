//! Shared WSDOT client configuration and request plumbing.
//!
//! One [`WsdotClient`] holds the HTTP transport and the API key. The
//! cameras and ferries clients borrow it to issue their requests; each
//! sub-API has its own base URL and its own name for the access-code
//! query parameter.

use std::fmt;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cameras::CamerasClient;
use crate::error::WsdotError;
use crate::ferries::FerriesClient;

/// Default base URL for the Highway Cameras API.
pub const DEFAULT_CAMERAS_BASE_URL: &str =
    "http://www.wsdot.wa.gov/Traffic/api/HighwayCameras/HighwayCamerasREST.svc";

/// Default base URL for the Washington State Ferries APIs.
pub const DEFAULT_FERRIES_BASE_URL: &str = "https://www.wsdot.wa.gov/Ferries/API";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A WSDOT sub-API. Determines the base URL and access-code parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Api {
    Cameras,
    Ferries,
}

impl Api {
    /// Query parameter carrying the API key.
    pub(crate) fn access_code_param(self) -> &'static str {
        match self {
            Api::Cameras => "AccessCode",
            Api::Ferries => "apiaccesscode",
        }
    }
}

/// Configuration for the WSDOT client.
#[derive(Debug, Clone)]
pub struct WsdotConfig {
    /// API key issued by the WSDOT traveler information site
    pub api_key: String,
    /// Base URL for the Highway Cameras API
    pub cameras_base_url: String,
    /// Base URL for the ferries APIs
    pub ferries_base_url: String,
    /// Request timeout in seconds, used only when no transport is supplied
    pub timeout_secs: u64,
    /// Caller-supplied transport
    pub http: Option<reqwest::Client>,
}

impl WsdotConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            cameras_base_url: DEFAULT_CAMERAS_BASE_URL.to_string(),
            ferries_base_url: DEFAULT_FERRIES_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            http: None,
        }
    }

    /// Replace the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Use a caller-supplied transport. Its own timeout settings apply.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Set a custom cameras base URL (for testing).
    pub fn with_cameras_base_url(mut self, url: impl Into<String>) -> Self {
        self.cameras_base_url = url.into();
        self
    }

    /// Set a custom ferries base URL (for testing).
    pub fn with_ferries_base_url(mut self, url: impl Into<String>) -> Self {
        self.ferries_base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// WSDOT API client.
///
/// Cheap to clone and safe to share between tasks: the transport is
/// reference counted internally and nothing here is mutated after
/// construction.
#[derive(Clone)]
pub struct WsdotClient {
    http: reqwest::Client,
    api_key: String,
    cameras_base_url: String,
    ferries_base_url: String,
}

impl fmt::Debug for WsdotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WsdotClient")
            .field("api_key", &"<redacted>")
            .field("cameras_base_url", &self.cameras_base_url)
            .field("ferries_base_url", &self.ferries_base_url)
            .finish_non_exhaustive()
    }
}

impl WsdotClient {
    /// Create a new WSDOT client with the given configuration.
    ///
    /// Fails if the API key is empty.
    pub fn new(config: WsdotConfig) -> Result<Self, WsdotError> {
        if config.api_key.is_empty() {
            return Err(WsdotError::InvalidConfiguration("API key must not be empty"));
        }

        let http = match config.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()?,
        };

        Ok(Self {
            http,
            api_key: config.api_key,
            cameras_base_url: config.cameras_base_url,
            ferries_base_url: config.ferries_base_url,
        })
    }

    /// The API key sent with every request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Highway Cameras operations.
    pub fn cameras(&self) -> CamerasClient {
        CamerasClient::new(self.clone())
    }

    /// Ferries operations.
    pub fn ferries(&self) -> FerriesClient {
        FerriesClient::new(self.clone())
    }

    fn base_url(&self, api: Api) -> &str {
        match api {
            Api::Cameras => &self.cameras_base_url,
            Api::Ferries => &self.ferries_base_url,
        }
    }

    /// Build the full URL for `path` on `api`, including the access code
    /// and any extra query parameters.
    pub(crate) fn endpoint_url(
        &self,
        api: Api,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Url, WsdotError> {
        let raw = format!("{}/{}", self.base_url(api).trim_end_matches('/'), path);

        let mut url = Url::parse(&raw).map_err(|e| WsdotError::RequestConstruction {
            url: raw.clone(),
            message: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(WsdotError::RequestConstruction {
                url: raw,
                message: "URL cannot carry a path".to_string(),
            });
        }

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(api.access_code_param(), &self.api_key);
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// `operation` names the call in logs and decode errors.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        api: Api,
        path: &str,
        query: &[(&str, String)],
        operation: &'static str,
    ) -> Result<T, WsdotError> {
        let url = self.endpoint_url(api, path, query)?;

        debug!(operation, path = url.path(), "sending WSDOT request");

        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            warn!(operation, status = status.as_u16(), "unexpected WSDOT status");
            return Err(WsdotError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| WsdotError::Decode { operation, source })
    }
}
