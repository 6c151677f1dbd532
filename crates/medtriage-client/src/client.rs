// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Medtriage backend.
//!
//! Provides [`TriageClient`] which handles URL construction, body encoding,
//! and decoding of the backend's `error`-envelope convention. Requests are
//! sent exactly once.

use std::time::Duration;

use medtriage_config::model::ApiConfig;
use medtriage_core::TriageError;
use medtriage_core::types::AccountKind;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::account::AccountApi;
use crate::ai::AiApi;
use crate::doctor::DoctorApi;
use crate::endpoint::{BodyKind, Endpoint};
use crate::patient::PatientApi;

/// Longest response excerpt kept in [`TriageError::Status`].
const MAX_BODY_EXCERPT: usize = 512;

/// Body attached to a request.
pub(crate) enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Form),
}

impl RequestBody {
    /// Serializes a typed request record.
    pub(crate) fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, TriageError> {
        serde_json::to_value(body)
            .map(RequestBody::Json)
            .map_err(|e| TriageError::Internal(format!("failed to encode request body: {e}")))
    }

    fn kind(&self) -> BodyKind {
        match self {
            RequestBody::Empty => BodyKind::None,
            RequestBody::Json(_) => BodyKind::Json,
            RequestBody::Multipart(_) => BodyKind::Multipart,
        }
    }
}

/// HTTP client for the triage backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TriageClient {
    http: reqwest::Client,
    base_url: Url,
}

impl TriageClient {
    /// Creates a client from the `[api]` configuration section.
    pub fn new(config: &ApiConfig) -> Result<Self, TriageError> {
        Self::with_options(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    /// Creates a client with explicit settings.
    pub fn with_options(
        base_url: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, TriageError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| TriageError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Points a default-configured client at `base_url` (for wiremock tests).
    pub fn with_base_url(base_url: &str) -> Result<Self, TriageError> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn patient(&self) -> PatientApi<'_> {
        PatientApi::new(self)
    }

    pub fn doctor(&self) -> DoctorApi<'_> {
        DoctorApi::new(self)
    }

    pub fn ai(&self) -> AiApi<'_> {
        AiApi::new(self)
    }

    /// Registration-independent account flows (OTP, password reset, deletion).
    pub fn account(&self, kind: AccountKind) -> AccountApi<'_> {
        AccountApi::new(self, kind)
    }

    /// Absolute URL for an endpoint, with percent-encoded path parameters.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, TriageError> {
        let segments = endpoint.segments();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(TriageError::InvalidInput(format!(
                "empty path parameter for {endpoint}"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TriageError::Config(format!("base URL `{}` cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments)
            .push("");

        let query = endpoint.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Sends one request and decodes the response envelope into `T`.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: RequestBody,
    ) -> Result<T, TriageError> {
        let url = self.url_for(&endpoint)?;
        let method = endpoint.method();

        if body.kind() != endpoint.body_kind() {
            return Err(TriageError::Internal(format!(
                "{endpoint} expects a {:?} body, got {:?}",
                endpoint.body_kind(),
                body.kind()
            )));
        }

        let request = self.http.request(method.clone(), url);
        let request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await.map_err(|e| TriageError::Transport {
            message: if e.is_timeout() {
                format!("{endpoint} timed out")
            } else {
                format!("{endpoint} failed: {e}")
            },
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(method = %method, path = %endpoint.path(), status = %status, "response received");

        let body = response.text().await.map_err(|e| TriageError::Transport {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        decode_envelope(status, &body)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, TriageError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| TriageError::Config(format!("invalid base URL `{raw}`: {e}")))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(TriageError::Config(format!(
            "base URL `{raw}` must be an http(s) URL"
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Decodes a response body following the backend's envelope convention.
///
/// A JSON object carrying an `error` string is a declared failure regardless
/// of status. Otherwise a non-2xx status is a transport-level failure and a
/// 2xx body must decode into `T`. An empty 2xx body decodes as `{}`.
pub fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, TriageError> {
    let trimmed = body.trim();
    let parsed = if trimmed.is_empty() {
        Ok(Value::Object(serde_json::Map::new()))
    } else {
        serde_json::from_str::<Value>(trimmed)
    };

    if let Ok(value) = &parsed
        && let Some(message) = envelope_error(value)
    {
        debug!(status = %status, error = %message, "backend declared failure");
        return Err(TriageError::Api {
            status: status.as_u16(),
            message,
        });
    }

    if !status.is_success() {
        return Err(TriageError::Status {
            status: status.as_u16(),
            body: excerpt(trimmed),
        });
    }

    let value = parsed.map_err(|e| TriageError::Decode {
        message: format!("response is not valid JSON: {e}"),
        source: Some(Box::new(e)),
    })?;

    serde_json::from_value(value).map_err(|e| TriageError::Decode {
        message: format!("unexpected response shape: {e}"),
        source: Some(Box::new(e)),
    })
}

fn envelope_error(value: &Value) -> Option<String> {
    value
        .as_object()?
        .get("error")?
        .as_str()
        .map(str::to_owned)
}

fn excerpt(body: &str) -> String {
    if body.chars().count() <= MAX_BODY_EXCERPT {
        return body.to_string();
    }
    let mut out: String = body.chars().take(MAX_BODY_EXCERPT).collect();
    out.push_str("...");
    out
}
