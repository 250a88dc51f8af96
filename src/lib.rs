/*!
 * # ytcaps - Closed caption track downloader
 *
 * A Rust library for extracting closed caption tracks from the platform's
 * player endpoint and serializing them as SubRip (SRT).
 *
 * ## Features
 *
 * - Fetch the caption track catalog for a video
 * - Validate catalog records into typed track descriptors
 * - Parse json3 track documents into an ordered caption sequence
 * - Serialize tracks as SRT with progress reporting and cooperative
 *   cancellation
 * - Download tracks to files with automatic directory creation
 * - ISO 639-1 and ISO 639-3 language code matching
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `transport`: Upstream fetch collaborators (player endpoint client)
 * - `player_response`: Raw upstream document shapes
 * - `catalog`: Track catalog extraction and validation
 * - `track_parser`: Track content parsing
 * - `caption_model`: Internal caption data model
 * - `srt_writer`: SRT serialization
 * - `caption_client`: High-level extraction facade
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod caption_client;
pub mod caption_model;
pub mod catalog;
pub mod errors;
pub mod language_utils;
pub mod player_response;
pub mod srt_writer;
pub mod track_parser;
pub mod transport;

// Re-export main types for easier usage
pub use app_config::Config;
pub use caption_client::{CaptionClient, resolve_video_id};
pub use caption_model::{Caption, CaptionPart, Language, Manifest, Track, TrackDescriptor};
pub use errors::{AppError, ExtractionError, TransportError};
pub use language_utils::{caption_codes_match, get_language_name, normalize_to_part3};
pub use srt_writer::WriteOutcome;
pub use transport::{CaptionTransport, InnertubeTransport};
