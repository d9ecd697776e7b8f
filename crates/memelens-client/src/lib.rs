//! memelens-client: talks to the meme classification service.
//!
//! The service exposes two routes:
//!
//! - `POST /predict` takes a multipart form with one `file` field and
//!   answers `{"prediction": "<label>"}`.
//! - `GET /` answers `{"message": "<text>"}` as a liveness check.
//!
//! Works on both native targets and `wasm32-unknown-unknown` (where
//! `reqwest` is backed by the browser's `fetch`).

use memelens_core::{Prediction, SelectedFile};
use reqwest::multipart::{Form, Part};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};

/// Errors that can occur while classifying a file.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint could not be turned into an absolute URL.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("server responded with {status}")]
    Status { status: StatusCode },

    /// The body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Body of the service's liveness route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
}

/// Client bound to one classification endpoint.
#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl PredictClient {
    /// Create a client for an absolute endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute `http` or `https` URL.
    pub fn new(endpoint: &str) -> Result<Self, SubmitError> {
        let url = Url::parse(endpoint).map_err(|e| SubmitError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Self::from_url(endpoint, url)
    }

    /// Create a client for `endpoint` resolved against `base`.
    ///
    /// `endpoint` may be relative (`/predict`) or absolute; an absolute
    /// endpoint ignores `base`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InvalidEndpoint`] if `base` is not an
    /// absolute URL, the join fails, or the result is not `http`/`https`.
    pub fn with_base(base: &str, endpoint: &str) -> Result<Self, SubmitError> {
        let invalid = |reason: String| SubmitError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason,
        };
        let base_url = Url::parse(base).map_err(|e| invalid(format!("base {base:?}: {e}")))?;
        check_scheme(endpoint, &base_url)?;
        let url = base_url.join(endpoint).map_err(|e| invalid(e.to_string()))?;
        Self::from_url(endpoint, url)
    }

    fn from_url(endpoint: &str, url: Url) -> Result<Self, SubmitError> {
        check_scheme(endpoint, &url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: url,
        })
    }

    /// The resolved classification URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The liveness URL: the root of the endpoint's origin.
    #[must_use]
    pub fn health_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    /// Submit `file` for classification.
    ///
    /// Sends a multipart form whose `file` field carries the bytes, file
    /// name, and declared content type. No timeout is applied beyond the
    /// transport's own.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] if the request fails in flight,
    /// [`SubmitError::Status`] on a non-2xx reply, and
    /// [`SubmitError::MalformedResponse`] if the body lacks a string
    /// `prediction` field.
    #[allow(clippy::future_not_send)] // fetch futures are !Send on wasm32
    pub async fn classify(&self, file: &SelectedFile) -> Result<Prediction, SubmitError> {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_owned())
            .mime_str(file.content_type())?;
        let form = Form::new().part("file", part);

        log::debug!("POST {} ({})", self.endpoint, file.name());
        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status { status });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<Prediction>(&body)
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()))
    }

    /// Ask the service whether it is up.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`classify`](Self::classify).
    #[allow(clippy::future_not_send)] // fetch futures are !Send on wasm32
    pub async fn health(&self) -> Result<ServiceStatus, SubmitError> {
        let response = self.http.get(self.health_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status { status });
        }
        let body = response.bytes().await?;
        serde_json::from_slice::<ServiceStatus>(&body)
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()))
    }
}

/// Only `http` and `https` are accepted. `Url::parse("localhost:8000")`
/// succeeds with scheme `localhost`.
fn check_scheme(endpoint: &str, url: &Url) -> Result<(), SubmitError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(SubmitError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: format!("unsupported scheme {scheme:?} in {url}"),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn relative_endpoint_needs_base() {
        let err = PredictClient::new("/predict").unwrap_err();
        assert!(matches!(err, SubmitError::InvalidEndpoint { .. }));
    }

    #[test]
    fn relative_endpoint_joins_origin() {
        let client = PredictClient::with_base("http://localhost:8080/app/index.html", "/predict")
            .unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:8080/predict");
    }

    #[test]
    fn absolute_endpoint_ignores_base() {
        let client =
            PredictClient::with_base("http://localhost:8080/", "https://api.example.org/predict")
                .unwrap();
        assert_eq!(client.endpoint().as_str(), "https://api.example.org/predict");
    }

    #[test]
    fn bad_base_is_reported() {
        let err = PredictClient::with_base("not a url", "/predict").unwrap_err();
        assert!(err.to_string().contains("/predict"));
    }

    #[test]
    fn schemeless_host_is_rejected() {
        let err = PredictClient::with_base("localhost:8000", "/predict").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"), "got {err}");
        let err = PredictClient::new("localhost:8000/predict").unwrap_err();
        assert!(matches!(err, SubmitError::InvalidEndpoint { .. }));
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        for endpoint in ["ftp://example.org/predict", "file:///predict", "data:text/plain,x"] {
            let err = PredictClient::new(endpoint).unwrap_err();
            assert!(matches!(err, SubmitError::InvalidEndpoint { .. }), "{endpoint}");
        }
        let err = PredictClient::with_base("http://localhost:8000/", "ftp://example.org/predict")
            .unwrap_err();
        assert!(matches!(err, SubmitError::InvalidEndpoint { .. }));
        assert!(PredictClient::new("https://api.example.org/predict").is_ok());
    }

    #[test]
    fn health_url_is_origin_root() {
        let client = PredictClient::new("http://localhost:8000/v1/predict?x=1").unwrap();
        assert_eq!(client.health_url().as_str(), "http://localhost:8000/");
    }
}
