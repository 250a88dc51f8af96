use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use crate::app_config::Config;
use crate::caption_client::{CaptionClient, resolve_video_id};
use crate::caption_model::{Manifest, TrackDescriptor};
use crate::language_utils;
use crate::srt_writer::WriteOutcome;
use crate::transport::InnertubeTransport;

// @module: Application controller for caption downloads

/// Main application controller for caption extraction
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Caption pipeline over the production transport
    client: CaptionClient<InnertubeTransport>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let transport = InnertubeTransport::with_endpoint(&config.endpoint, config.timeout_secs);
        let client = CaptionClient::new(transport);

        Ok(Self { config, client })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.preferred_language.is_empty()
    }

    /// List the caption tracks available for a video, in catalog order
    pub async fn list(&self, video_reference: &str) -> Result<()> {
        let video_id = resolve_video_id(video_reference)?;
        let manifest = self.client.manifest(&video_id).await?;

        if manifest.is_empty() {
            warn!("No caption tracks available for {}", video_id);
            return Ok(());
        }

        for descriptor in manifest.tracks() {
            println!("{}", descriptor);
        }

        Ok(())
    }

    /// Download one caption track of a video as an SRT file.
    ///
    /// Track selection: an explicit language beats the configured preference;
    /// with `prefer_manual` a manual track in the requested language wins over
    /// an auto-generated one. An explicitly requested language with no match
    /// fails the download, while a missed configured preference falls back to
    /// the first catalog entry.
    pub async fn download(
        &self,
        video_reference: &str,
        language: Option<&str>,
        prefer_manual: bool,
        output: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        let video_id = resolve_video_id(video_reference)?;
        let manifest = self.client.manifest(&video_id).await?;

        if manifest.is_empty() {
            return Err(anyhow!("No caption tracks available for {}", video_id));
        }

        let requested = language.unwrap_or(&self.config.preferred_language);
        let descriptor = match Self::select_track(&manifest, requested, prefer_manual) {
            Some(descriptor) => descriptor,
            None if language.is_some() => {
                return Err(anyhow!(
                    "No caption track matching '{}'. Available: {}",
                    requested,
                    manifest
                        .tracks()
                        .iter()
                        .map(|d| d.language.code.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
            None => {
                // The platform lists its default track first.
                let first = manifest
                    .tracks()
                    .first()
                    .ok_or_else(|| anyhow!("No caption tracks available for {}", video_id))?;
                warn!(
                    "No '{}' track, falling back to catalog default '{}'",
                    requested, first.language.code
                );
                first
            }
        };

        info!("Selected track: {}", descriptor);

        let output_path = output.unwrap_or_else(|| {
            self.config
                .output_dir
                .join(format!("{}.{}.srt", video_id, descriptor.language.code))
        });

        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping download, output already exists (use -f to force overwrite): {:?}",
                output_path
            );
            return Ok(());
        }

        let cancellation = CancellationToken::new();
        let signal_token = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping after the current caption");
                signal_token.cancel();
            }
        });

        let progress_bar = ProgressBar::new(100);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Downloading captions");

        let mut report = |fraction: f64| {
            progress_bar.set_position((fraction * 100.0).round() as u64);
        };

        let outcome = self
            .client
            .download_to(descriptor, &output_path, Some(&mut report), Some(&cancellation))
            .await
            .with_context(|| format!("Failed to download captions for {}", video_id))?;

        match outcome {
            WriteOutcome::Completed => {
                progress_bar.finish_with_message("Done");
                info!("Success: {:?}", output_path);
            }
            WriteOutcome::Cancelled { blocks_written } => {
                progress_bar.abandon_with_message("Cancelled");
                warn!(
                    "Cancelled; {} caption(s) kept in {:?}",
                    blocks_written, output_path
                );
            }
        }

        Ok(())
    }

    fn select_track<'a>(
        manifest: &'a Manifest,
        requested: &str,
        prefer_manual: bool,
    ) -> Option<&'a TrackDescriptor> {
        if prefer_manual {
            if let Some(descriptor) = manifest
                .manual()
                .find(|d| language_utils::caption_codes_match(&d.language.code, requested))
            {
                return Some(descriptor);
            }
        }

        manifest.find_by_language(requested)
    }
}
