use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for caption track selection
///
/// Caption catalogs carry BCP-47-style codes ("en", "en-US", "pt-BR") while
/// callers tend to pass bare ISO 639 codes in either 2- or 3-letter form.
/// These helpers reduce both sides to a comparable primary subtag.
/// Primary language subtag of a caption code, lowercased
///
/// "en-US" becomes "en", "zh-Hans" becomes "zh", "en" stays "en".
pub fn primary_subtag(code: &str) -> String {
    code.trim()
        .split('-')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Normalize a 2- or 3-letter ISO 639 code to its 639-3 form
pub fn normalize_to_part3(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    if normalized.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized) {
            return Ok(lang.to_639_3().to_string());
        }
    } else if normalized.len() == 3 && Language::from_639_3(&normalized).is_some() {
        return Ok(normalized);
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Check whether a caption track code matches a requested language code
///
/// Both sides are reduced to their primary subtag, then compared through ISO
/// 639-3 so that "eng" matches "en-US". Codes unknown to ISO 639 fall back to
/// exact primary-subtag comparison, which keeps vendor-specific caption codes
/// selectable.
pub fn caption_codes_match(track_code: &str, requested: &str) -> bool {
    let track_primary = primary_subtag(track_code);
    let requested_primary = primary_subtag(requested);

    if track_primary.is_empty() || requested_primary.is_empty() {
        return false;
    }

    match (
        normalize_to_part3(&track_primary),
        normalize_to_part3(&requested_primary),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => track_primary == requested_primary,
    }
}

/// Get the English language name for a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part3(&primary_subtag(code))?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
