use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use tokio_util::sync::CancellationToken;

use crate::caption_model::{Manifest, Track, TrackDescriptor};
use crate::catalog::extract_catalog;
use crate::srt_writer::{self, ProgressFn, WriteOutcome};
use crate::track_parser::parse_track;
use crate::transport::CaptionTransport;

// @module: Caption extraction facade

/// Patterns that recognize a video reference in its common written forms:
/// watch URLs, short links, embed URLs, and the bare 11-character id.
static VIDEO_ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?:v=|/embed/|/shorts/|youtu\.be/)([A-Za-z0-9_-]{11})").unwrap(),
        Regex::new(r"^([A-Za-z0-9_-]{11})$").unwrap(),
    ]
});

/// Extract the 11-character video id from a URL or bare id string
pub fn resolve_video_id(reference: &str) -> Result<String> {
    let trimmed = reference.trim();

    for pattern in VIDEO_ID_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(trimmed) {
            if let Some(id) = captures.get(1) {
                return Ok(id.as_str().to_string());
            }
        }
    }

    Err(anyhow!("Not a recognizable video reference: {}", reference))
}

/// High-level client tying the fetch, extraction, and serialization stages
/// together.
///
/// The transport is injected so the whole pipeline runs against canned
/// documents in tests. All methods borrow immutably, so one client can serve
/// concurrent lookups for different videos.
#[derive(Debug)]
pub struct CaptionClient<T: CaptionTransport> {
    // @field: Upstream document fetcher
    transport: T,
}

impl<T: CaptionTransport> CaptionClient<T> {
    /// Create a client over the given transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch and validate the caption track catalog for a video
    ///
    /// Returns an empty manifest when the video exists but carries no caption
    /// tracks. Fails if any listed track is missing a required field.
    pub async fn manifest(&self, video_id: &str) -> Result<Manifest> {
        let response = self
            .transport
            .fetch_player_response(video_id)
            .await
            .with_context(|| format!("Failed to fetch player response for {}", video_id))?;

        let descriptors = extract_catalog(&response)
            .with_context(|| format!("Invalid caption catalog for {}", video_id))?;

        info!("Found {} caption track(s) for {}", descriptors.len(), video_id);
        Ok(Manifest::new(descriptors))
    }

    /// Fetch and parse the full content of one caption track
    pub async fn track(&self, descriptor: &TrackDescriptor) -> Result<Track> {
        debug!("Fetching track {}", descriptor.language.code);

        let document = self
            .transport
            .fetch_track_document(&descriptor.url)
            .await
            .with_context(|| {
                format!("Failed to fetch caption track {}", descriptor.language.code)
            })?;

        let captions = parse_track(&document)
            .with_context(|| format!("Corrupted caption track {}", descriptor.language.code))?;

        Ok(Track::new(captions))
    }

    /// Fetch a track and serialize it to an arbitrary sink as SRT
    pub async fn write_track_to(
        &self,
        descriptor: &TrackDescriptor,
        sink: &mut impl Write,
        progress: Option<ProgressFn<'_>>,
        cancellation: Option<&CancellationToken>,
    ) -> Result<WriteOutcome> {
        let track = self.track(descriptor).await?;
        srt_writer::write_track(&track, sink, progress, cancellation)
    }

    /// Fetch a track and write it to a file as SRT.
    ///
    /// Parent directories are created as needed and the destination is
    /// truncated if it already exists. The file handle is released on every
    /// exit path, including errors and cancellation. A cancelled download
    /// leaves the file holding a valid SRT prefix.
    pub async fn download_to(
        &self,
        descriptor: &TrackDescriptor,
        path: &Path,
        progress: Option<ProgressFn<'_>>,
        cancellation: Option<&CancellationToken>,
    ) -> Result<WriteOutcome> {
        let track = self.track(descriptor).await?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
            }
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {:?}", path))?;
        let mut sink = BufWriter::new(file);

        let outcome = srt_writer::write_track(&track, &mut sink, progress, cancellation)?;
        sink.flush().context("Failed to flush output file")?;

        match outcome {
            WriteOutcome::Completed => {
                info!("Wrote {} caption(s) to {:?}", track.len(), path);
            }
            WriteOutcome::Cancelled { blocks_written } => {
                info!(
                    "Download cancelled; {} of {} caption(s) written to {:?}",
                    blocks_written,
                    track.len(),
                    path
                );
            }
        }

        Ok(outcome)
    }
}
