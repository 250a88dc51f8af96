/*!
 * Mock transport implementation for testing
 *
 * Provides a canned-document implementation of the transport trait so the
 * whole pipeline runs without network access. Calls are tracked to make sure
 * no unexpected fetches happen.
 */

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ytcaps::errors::TransportError;
use ytcaps::player_response::{RawPlayerResponse, RawTrackDocument};
use ytcaps::transport::CaptionTransport;

/// Tracks transport calls to ensure no actual external requests are made
#[derive(Debug, Default)]
pub struct ApiCallTracker {
    /// Count of mock fetch calls made
    pub call_count: usize,
    /// Last video id or URL requested
    pub last_request: Option<String>,
    /// Should the next call fail
    pub should_fail: bool,
    /// Error to return if failing
    pub error_type: MockErrorType,
}

/// Type of error to simulate
#[derive(Debug, Clone, Copy, Default)]
pub enum MockErrorType {
    /// Connection error
    #[default]
    Connection,
    /// Malformed response body
    Parse,
    /// HTTP error status from the endpoint
    Api,
}

/// Transport returning canned documents instead of fetching them
#[derive(Debug, Default)]
pub struct MockTransport {
    player_responses: Mutex<HashMap<String, RawPlayerResponse>>,
    track_documents: Mutex<HashMap<String, RawTrackDocument>>,
    tracker: Arc<Mutex<ApiCallTracker>>,
}

impl MockTransport {
    /// Create an empty mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned player response for a video id
    pub fn with_player_response(self, video_id: &str, response: RawPlayerResponse) -> Self {
        self.player_responses
            .lock()
            .unwrap()
            .insert(video_id.to_string(), response);
        self
    }

    /// Register a canned track document for a track URL
    pub fn with_track_document(self, url: &str, document: RawTrackDocument) -> Self {
        self.track_documents
            .lock()
            .unwrap()
            .insert(url.to_string(), document);
        self
    }

    /// Get the API call tracker
    pub fn tracker(&self) -> Arc<Mutex<ApiCallTracker>> {
        self.tracker.clone()
    }

    /// Configure the mock to fail on the next call
    pub fn fail_next_call(&self, error_type: MockErrorType) {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.should_fail = true;
        tracker.error_type = error_type;
    }

    fn record_call(&self, request: &str) -> Option<TransportError> {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.call_count += 1;
        tracker.last_request = Some(request.to_string());

        if tracker.should_fail {
            tracker.should_fail = false; // Reset for next call
            return Some(match tracker.error_type {
                MockErrorType::Connection => {
                    TransportError::RequestFailed("Connection failed".into())
                }
                MockErrorType::Parse => TransportError::ParseError("Malformed body".into()),
                MockErrorType::Api => TransportError::ApiError {
                    status_code: 404,
                    message: "Not found".into(),
                },
            });
        }

        None
    }
}

#[async_trait]
impl CaptionTransport for MockTransport {
    async fn fetch_player_response(
        &self,
        video_id: &str,
    ) -> Result<RawPlayerResponse, TransportError> {
        if let Some(error) = self.record_call(video_id) {
            return Err(error);
        }

        self.player_responses
            .lock()
            .unwrap()
            .get(video_id)
            .cloned()
            .ok_or_else(|| TransportError::ApiError {
                status_code: 404,
                message: format!("No canned player response for {}", video_id),
            })
    }

    async fn fetch_track_document(&self, url: &str) -> Result<RawTrackDocument, TransportError> {
        if let Some(error) = self.record_call(url) {
            return Err(error);
        }

        self.track_documents
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::ApiError {
                status_code: 404,
                message: format!("No canned track document for {}", url),
            })
    }
}
