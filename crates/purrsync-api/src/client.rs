// Hand-crafted async HTTP client for The Cat API (v1).
//
// Base path: https://api.thecatapi.com/v1/
// Auth: x-api-key header

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::types::{CatImage, Favourite};

/// Public endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.thecatapi.com/v1/";

// ── Response envelope ────────────────────────────────────────────────

/// A response that reached us, successful or not.
///
/// `body` is `Some` only for a 2xx status with a decodable payload.
/// Otherwise `message` carries the response text or the decode failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub body: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Whether the HTTP status was in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for The Cat API.
///
/// Uses API-key authentication and communicates via JSON REST endpoints
/// under `/v1/`.
#[derive(Debug, Clone)]
pub struct CatApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL, API key, and transport config.
    ///
    /// Injects `x-api-key` as a sensitive default header on every request.
    pub fn from_api_key(
        base_url: &str,
        api_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key_value =
            HeaderValue::from_str(api_key.expose_secret()).map_err(|e| Error::InvalidApiKey {
                message: format!("invalid API key header value: {e}"),
            })?;
        key_value.set_sensitive(true);
        headers.insert("x-api-key", key_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build without an API key. The search endpoint still answers, with
    /// stricter rate limits.
    pub fn anonymous(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client_with_headers(HeaderMap::new())?;
        Self::from_reqwest(base_url, http)
    }

    /// Ensure the base path ends with `/` so relative joins append.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Search one page of images.
    ///
    /// `GET /images/search?limit={limit}&page={page}&order=Asc`
    pub async fn search_images(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ApiResponse<Vec<CatImage>>, Error> {
        let params = [
            ("limit", limit.to_string()),
            ("page", page.to_string()),
            ("order", "Asc".to_owned()),
        ];
        self.get_with_params("images/search", &params).await
    }

    /// List the favourites stored remotely for a user.
    ///
    /// `GET /favourites?sub_id={user_id}`
    pub async fn list_favourites(&self, user_id: &str) -> Result<ApiResponse<Vec<Favourite>>, Error> {
        let params = [("sub_id", user_id.to_owned())];
        self.get_with_params("favourites", &params).await
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<ApiResponse<T>, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    /// Read the body and sort it into an [`ApiResponse`].
    ///
    /// Only a failure to read the body is an `Err`; status and decode
    /// problems are reported in the envelope.
    async fn handle_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<ApiResponse<T>, Error> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "request rejected");
            let message = if body.trim().is_empty() {
                status.canonical_reason().map(str::to_owned)
            } else {
                Some(body)
            };
            return Ok(ApiResponse {
                status: status.as_u16(),
                body: None,
                message,
            });
        }

        if body.trim().is_empty() {
            return Ok(ApiResponse {
                status: status.as_u16(),
                body: None,
                message: Some("empty response body".into()),
            });
        }

        match serde_json::from_str(&body) {
            Ok(parsed) => Ok(ApiResponse {
                status: status.as_u16(),
                body: Some(parsed),
                message: None,
            }),
            Err(e) => {
                warn!(error = %e, "malformed response payload");
                Ok(ApiResponse {
                    status: status.as_u16(),
                    body: None,
                    message: Some(format!("malformed payload: {e}")),
                })
            }
        }
    }
}
