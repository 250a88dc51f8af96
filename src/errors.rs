/*!
 * Error types for the ytcaps application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised when a required field is absent from an upstream record.
///
/// These are fatal to the enclosing operation: one malformed track record
/// invalidates the whole catalog, and one malformed caption part invalidates
/// the whole track parse. They are never retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A caption track record had no usable URL
    #[error("caption track {index} has no URL")]
    MissingTrackUrl {
        /// Position of the record in the upstream catalog
        index: usize,
    },

    /// A caption track record had no language code
    #[error("caption track {index} has no language code")]
    MissingLanguageCode {
        /// Position of the record in the upstream catalog
        index: usize,
    },

    /// A caption track record had no language name
    #[error("caption track {index} has no language name")]
    MissingLanguageName {
        /// Position of the record in the upstream catalog
        index: usize,
    },

    /// A caption part survived text filtering but carried no start offset
    #[error("caption {caption_index} part {part_index} has no start offset")]
    MissingPartOffset {
        /// Position of the caption in the track document
        caption_index: usize,
        /// Position of the part within its caption
        part_index: usize,
    },
}

/// Errors that can occur when talking to the upstream platform
#[derive(Error, Debug)]
pub enum TransportError {
    /// Error when making an HTTP request fails
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Error when decoding a response body fails
    #[error("failed to parse response: {0}")]
    ParseError(String),

    /// Error returned by the platform itself
    #[error("upstream responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message or body excerpt
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from catalog or track extraction
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Error from the upstream transport
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error from a file operation
    #[error("file error: {0}")]
    File(String),

    /// Any other error
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
