/*!
 * Tests for the caption data model
 */

use std::time::Duration;

use ytcaps::caption_model::{Caption, Language, Manifest, Track, TrackDescriptor};

fn descriptor(code: &str, name: &str, auto: bool) -> TrackDescriptor {
    TrackDescriptor {
        url: format!("https://example.com/t/{}", code),
        language: Language {
            code: code.to_string(),
            name: name.to_string(),
        },
        is_auto_generated: auto,
    }
}

/// Test that manifest lookups are ISO-aware and subtag tolerant
#[test]
fn test_find_by_language_withIsoVariants_shouldMatch() {
    let manifest = Manifest::new(vec![
        descriptor("en-US", "English (United States)", false),
        descriptor("pt-BR", "Portuguese (Brazil)", false),
    ]);

    assert!(manifest.find_by_language("en").is_some());
    assert!(manifest.find_by_language("eng").is_some());
    assert!(manifest.find_by_language("pt").is_some());
    assert!(manifest.find_by_language("fr").is_none());
}

/// Test that lookups return the first match in upstream order
#[test]
fn test_find_by_language_withDuplicateLanguages_shouldReturnFirst() {
    let manifest = Manifest::new(vec![
        descriptor("en", "English", false),
        descriptor("en", "English (auto-generated)", true),
    ]);

    let found = manifest.find_by_language("en").unwrap();
    assert!(!found.is_auto_generated, "First catalog entry wins");
}

/// Test the manual/auto-generated track partitions
#[test]
fn test_manifest_partitions_withMixedTracks_shouldSplitByKind() {
    let manifest = Manifest::new(vec![
        descriptor("en", "English", false),
        descriptor("en", "English (auto-generated)", true),
        descriptor("es", "Spanish", false),
    ]);

    assert_eq!(manifest.len(), 3);
    assert_eq!(manifest.manual().count(), 2);
    assert_eq!(manifest.auto_generated().count(), 1);
}

/// Test descriptor display formatting
#[test]
fn test_descriptor_display_withAutoGeneratedTrack_shouldCarryMarker() {
    let manual = descriptor("en", "English", false);
    let auto = descriptor("en", "English", true);

    assert_eq!(format!("{}", manual), "English (en)");
    assert_eq!(format!("{}", auto), "English (en) [auto-generated]");
}

/// Test caption end instant computation
#[test]
fn test_caption_end_withOffsetAndDuration_shouldSum() {
    let caption = Caption {
        text: "Text".to_string(),
        offset: Duration::from_millis(1500),
        duration: Duration::from_millis(2500),
        parts: Vec::new(),
    };

    assert_eq!(caption.end(), Duration::from_millis(4000));
}

/// Test joined full text of a track
#[test]
fn test_track_full_text_withMultipleCaptions_shouldJoinWithNewlines() {
    let track = Track::new(vec![
        Caption {
            text: "First".to_string(),
            offset: Duration::ZERO,
            duration: Duration::from_secs(1),
            parts: Vec::new(),
        },
        Caption {
            text: "Second".to_string(),
            offset: Duration::from_secs(2),
            duration: Duration::from_secs(1),
            parts: Vec::new(),
        },
    ]);

    assert_eq!(track.full_text(), "First\nSecond");
    assert_eq!(track.len(), 2);
    assert!(!track.is_empty());
}
