use log::debug;

use crate::caption_model::{Language, TrackDescriptor};
use crate::errors::ExtractionError;
use crate::player_response::RawPlayerResponse;

// @module: Track catalog extraction

/// Extract the ordered caption track catalog from a player response.
///
/// Validation is all-or-nothing: a record missing its URL, language code or
/// language name fails the whole extraction with an [`ExtractionError`] naming
/// the field, and no partial catalog is returned. A malformed record almost
/// always indicates an upstream schema change affecting the whole response,
/// not one bad entry.
pub fn extract_catalog(
    response: &RawPlayerResponse,
) -> Result<Vec<TrackDescriptor>, ExtractionError> {
    let records = response.caption_tracks();
    debug!("Extracting catalog from {} raw track records", records.len());

    let mut tracks = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let url = record
            .base_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ExtractionError::MissingTrackUrl { index })?;

        let code = record
            .language_code
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or(ExtractionError::MissingLanguageCode { index })?;

        let name = record
            .language_name()
            .filter(|n| !n.is_empty())
            .ok_or(ExtractionError::MissingLanguageName { index })?;

        tracks.push(TrackDescriptor {
            url: url.to_string(),
            language: Language {
                code: code.to_string(),
                name,
            },
            is_auto_generated: record.is_auto_generated(),
        });
    }

    Ok(tracks)
}
