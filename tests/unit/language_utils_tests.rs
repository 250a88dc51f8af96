/*!
 * Tests for language utility functions
 */

use ytcaps::language_utils::{
    caption_codes_match, get_language_name, normalize_to_part3, primary_subtag,
};

/// Test primary subtag reduction
#[test]
fn test_primary_subtag_withRegionalCodes_shouldDropSubtags() {
    assert_eq!(primary_subtag("en-US"), "en");
    assert_eq!(primary_subtag("pt-BR"), "pt");
    assert_eq!(primary_subtag("zh-Hans"), "zh");
    assert_eq!(primary_subtag("en"), "en");

    // Case and whitespace
    assert_eq!(primary_subtag(" EN-us "), "en");
}

/// Test normalization of language codes to ISO 639-3 format
#[test]
fn test_normalize_to_part3_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part3("en").unwrap(), "eng");
    assert_eq!(normalize_to_part3("fr").unwrap(), "fra");
    assert_eq!(normalize_to_part3("eng").unwrap(), "eng");
    assert_eq!(normalize_to_part3("deu").unwrap(), "deu");

    // Case insensitivity
    assert_eq!(normalize_to_part3("EN").unwrap(), "eng");

    // Whitespace
    assert_eq!(normalize_to_part3(" en ").unwrap(), "eng");

    // Invalid codes
    assert!(normalize_to_part3("xyzzy").is_err());
    assert!(normalize_to_part3("e").is_err());
}

/// Test matching of caption codes against requested languages
#[test]
fn test_caption_codes_match_withMatchingCodes_shouldReturnTrue() {
    assert!(caption_codes_match("en", "en"));
    assert!(caption_codes_match("en", "eng"));
    assert!(caption_codes_match("eng", "en"));
    assert!(caption_codes_match("en-US", "en"));
    assert!(caption_codes_match("en-US", "eng"));
    assert!(caption_codes_match("pt-BR", "pt"));

    // Case insensitivity
    assert!(caption_codes_match("EN", "eng"));

    // Non-matches
    assert!(!caption_codes_match("en", "fr"));
    assert!(!caption_codes_match("en-US", "es"));
    assert!(!caption_codes_match("", "en"));
    assert!(!caption_codes_match("en", ""));
}

/// Test that vendor codes unknown to ISO 639 still match exactly
#[test]
fn test_caption_codes_match_withUnknownCodes_shouldFallBackToExactMatch() {
    assert!(caption_codes_match("yue", "yue"));
    assert!(caption_codes_match("qx1-US", "qx1"));
    assert!(!caption_codes_match("qx1", "qx2"));
}

/// Test retrieval of language names from codes
#[test]
fn test_get_language_name_withValidCodes_shouldReturnCorrectName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("eng").unwrap(), "English");
    assert_eq!(get_language_name("en-US").unwrap(), "English");
    assert_eq!(get_language_name("fr").unwrap(), "French");

    assert!(get_language_name("xyzzy").is_err());
}
