use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::caption_model::Track;

// @module: SRT serialization

/// Progress callback invoked once per written block with a fraction in (0, 1]
pub type ProgressFn<'a> = &'a mut dyn FnMut(f64);

/// How a serialization run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Every caption block was written
    Completed,

    /// Cancellation was observed; the sink holds a valid SRT prefix
    Cancelled {
        /// Number of complete blocks present in the sink
        blocks_written: usize,
    },
}

/// Format a millisecond timestamp as SRT `HH:MM:SS,mmm`
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Parse an SRT `HH:MM:SS,mmm` timestamp back to milliseconds
pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
    let parts: Vec<&str> = timestamp.split(&[':', ','][..]).collect();

    if parts.len() != 4 {
        return Err(anyhow!("Invalid timestamp format: {}", timestamp));
    }

    let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
    let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
    let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
    let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

    if minutes >= 60 || seconds >= 60 || millis >= 1000 {
        return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
    }

    Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
}

/// Millisecond count of a duration, truncating sub-millisecond components
fn truncate_to_ms(duration: Duration) -> u64 {
    duration.as_millis() as u64
}

/// Serialize a fully-parsed track to a sink as SRT.
///
/// The track must already be materialized: the total caption count is needed
/// to compute progress fractions. Blocks are written strictly in source order,
/// one per caption, numbered from 1.
///
/// Cancellation is cooperative and checked before every block. Once observed,
/// no further blocks are written and the already-written portion of the sink
/// stays as-is. An SRT prefix is independently valid, so there is no
/// rollback. Callers wanting atomic output should write to a temporary path
/// and rename on success themselves.
pub fn write_track(
    track: &Track,
    sink: &mut impl Write,
    mut progress: Option<ProgressFn<'_>>,
    cancellation: Option<&CancellationToken>,
) -> Result<WriteOutcome> {
    let total = track.len();

    for (position, caption) in track.captions().iter().enumerate() {
        if cancellation.is_some_and(|token| token.is_cancelled()) {
            debug!("Serialization cancelled after {position} of {total} blocks");
            return Ok(WriteOutcome::Cancelled {
                blocks_written: position,
            });
        }

        let sequence_number = position + 1;
        let start = format_timestamp(truncate_to_ms(caption.offset));
        let end = format_timestamp(truncate_to_ms(caption.end()));

        writeln!(sink, "{}", sequence_number).context("Failed to write sequence number")?;
        writeln!(sink, "{} --> {}", start, end).context("Failed to write timecode line")?;
        writeln!(sink, "{}", caption.text).context("Failed to write caption text")?;
        writeln!(sink).context("Failed to write block separator")?;

        if let Some(report) = progress.as_mut() {
            report(sequence_number as f64 / total as f64);
        }
    }

    Ok(WriteOutcome::Completed)
}
