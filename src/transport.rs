//! Upstream fetch collaborators.
//!
//! The pipeline never talks to the network directly; it goes through the
//! [`CaptionTransport`] trait so tests can substitute canned documents. The
//! production implementation is [`InnertubeTransport`], which speaks to the
//! platform's unauthenticated player endpoint.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::errors::TransportError;
use crate::player_response::{RawPlayerResponse, RawTrackDocument};

/// Common trait for upstream document fetchers
///
/// Failures are surfaced verbatim to the caller; this layer performs no
/// retries and no interpretation beyond decoding the response body.
#[async_trait]
pub trait CaptionTransport: Send + Sync + Debug {
    /// Fetch the player response document for a video
    async fn fetch_player_response(
        &self,
        video_id: &str,
    ) -> Result<RawPlayerResponse, TransportError>;

    /// Fetch the raw caption track document behind a descriptor URL
    async fn fetch_track_document(&self, url: &str) -> Result<RawTrackDocument, TransportError>;
}

/// Transport backed by the platform's innertube player endpoint
#[derive(Debug)]
pub struct InnertubeTransport {
    /// HTTP client for API requests
    client: Client,
    /// Player endpoint URL
    endpoint: String,
}

impl InnertubeTransport {
    /// Default player endpoint
    pub const DEFAULT_ENDPOINT: &'static str = "https://www.youtube.com/youtubei/v1/player";

    /// Client identity presented to the player endpoint. The ANDROID client
    /// receives unobfuscated caption URLs.
    const CLIENT_NAME: &'static str = "ANDROID";
    const CLIENT_VERSION: &'static str = "19.09.37";

    /// Create a transport against the default endpoint
    pub fn new(timeout_secs: u64) -> Self {
        Self::with_endpoint(Self::DEFAULT_ENDPOINT, timeout_secs)
    }

    /// Create a transport against a custom endpoint
    pub fn with_endpoint(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Rewrite a track URL so the document comes back as json3
    fn force_json3(url: &str) -> Result<String, TransportError> {
        let mut parsed = Url::parse(url)
            .map_err(|e| TransportError::ParseError(format!("invalid track URL: {}", e)))?;

        let retained: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(k, _)| k != "fmt")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        parsed
            .query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair("fmt", "json3");

        Ok(parsed.into())
    }
}

#[async_trait]
impl CaptionTransport for InnertubeTransport {
    async fn fetch_player_response(
        &self,
        video_id: &str,
    ) -> Result<RawPlayerResponse, TransportError> {
        debug!("Fetching player response for video {}", video_id);

        let body = json!({
            "videoId": video_id,
            "context": {
                "client": {
                    "clientName": Self::CLIENT_NAME,
                    "clientVersion": Self::CLIENT_VERSION,
                    "androidSdkVersion": 30,
                    "hl": "en",
                }
            }
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Player endpoint error ({}): {}", status, error_text);
            return Err(TransportError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<RawPlayerResponse>()
            .await
            .map_err(|e| TransportError::ParseError(e.to_string()))
    }

    async fn fetch_track_document(&self, url: &str) -> Result<RawTrackDocument, TransportError> {
        let url = Self::force_json3(url)?;
        debug!("Fetching track document from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Track endpoint error ({}): {}", status, error_text);
            return Err(TransportError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<RawTrackDocument>()
            .await
            .map_err(|e| TransportError::ParseError(e.to_string()))
    }
}
