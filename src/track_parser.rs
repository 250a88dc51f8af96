use std::time::Duration;

use log::debug;

use crate::caption_model::{Caption, CaptionPart};
use crate::errors::ExtractionError;
use crate::player_response::RawTrackDocument;

// @module: Track content parsing

/// Parse a raw track document into an ordered, validated caption sequence.
///
/// Each event passes through a filter/validate pipeline:
/// 1. An event whose text is the empty string is dropped. Whitespace-only text
///    is kept, since whitespace such as line breaks is meaningful.
/// 2. An event missing its start offset or duration is dropped silently. This
///    is an expected anomaly on auto-generated tracks and never aborts the
///    rest of the track.
/// 3. Parts with empty text are dropped under the same whitespace rule. A
///    surviving part with no offset fails the whole parse: no known legitimate
///    producer emits that, so it indicates corrupted data.
///
/// Source order is preserved throughout; nothing is re-sorted.
pub fn parse_track(document: &RawTrackDocument) -> Result<Vec<Caption>, ExtractionError> {
    let mut captions = Vec::with_capacity(document.events.len());

    for (caption_index, event) in document.events.iter().enumerate() {
        let text = event.resolved_text();
        if text.is_empty() {
            debug!("Dropping caption {caption_index}: empty text");
            continue;
        }

        let (Some(start_ms), Some(duration_ms)) = (event.start_ms, event.duration_ms) else {
            debug!("Dropping caption {caption_index}: missing offset or duration");
            continue;
        };
        let offset = Duration::from_millis(start_ms);

        let mut parts = Vec::new();
        for (part_index, segment) in event.segments.iter().enumerate() {
            let Some(part_text) = segment.text.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };

            let part_offset_ms =
                segment
                    .offset_ms
                    .ok_or(ExtractionError::MissingPartOffset {
                        caption_index,
                        part_index,
                    })?;

            // Wire offsets are relative to the event; the model carries
            // offsets from track start.
            parts.push(CaptionPart {
                text: part_text.to_string(),
                offset: offset + Duration::from_millis(part_offset_ms),
            });
        }

        captions.push(Caption {
            text,
            offset,
            duration: Duration::from_millis(duration_ms),
            parts,
        });
    }

    debug!(
        "Parsed {} captions from {} raw events",
        captions.len(),
        document.events.len()
    );

    Ok(captions)
}
