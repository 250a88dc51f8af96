use std::fmt;
use std::time::Duration;

use crate::language_utils;

// @module: Validated in-memory caption model
//
// Everything in this module is fully non-optional: absence has already been
// converted into errors or skips at the extraction boundary. All types are
// value-like and owned by whoever constructs them.

/// Language of a caption track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    // @field: Language code, e.g. "en" or "en-US"
    pub code: String,

    // @field: Human-readable name, e.g. "English (auto-generated)"
    pub name: String,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Descriptor of one fetchable caption track
///
/// Created only by the catalog extractor and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    // @field: URL the raw track document is fetched from
    pub url: String,

    // @field: Track language
    pub language: Language,

    // @field: Whether the track was produced by speech recognition
    pub is_auto_generated: bool,
}

impl fmt::Display for TrackDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_auto_generated {
            write!(f, "{} [auto-generated]", self.language)
        } else {
            write!(f, "{}", self.language)
        }
    }
}

/// Catalog of available caption tracks for one video
///
/// Insertion order is the upstream document order, which platforms use to put
/// a preferred/default track first. Immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    tracks: Vec<TrackDescriptor>,
}

impl Manifest {
    /// Wrap an extracted catalog
    pub fn new(tracks: Vec<TrackDescriptor>) -> Self {
        Manifest { tracks }
    }

    /// All track descriptors in upstream order
    pub fn tracks(&self) -> &[TrackDescriptor] {
        &self.tracks
    }

    /// Number of available tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the video has no caption tracks at all
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Find the first track matching a language code
    ///
    /// Matching is ISO-aware ("eng" matches "en") and tolerant of regional
    /// subtags ("en" matches "en-US"). Cardinality is low tens at most, so a
    /// linear scan is all that is needed.
    pub fn find_by_language(&self, code: &str) -> Option<&TrackDescriptor> {
        self.tracks
            .iter()
            .find(|t| language_utils::caption_codes_match(&t.language.code, code))
    }

    /// Tracks produced by speech recognition
    pub fn auto_generated(&self) -> impl Iterator<Item = &TrackDescriptor> {
        self.tracks.iter().filter(|t| t.is_auto_generated)
    }

    /// Manually authored tracks
    pub fn manual(&self) -> impl Iterator<Item = &TrackDescriptor> {
        self.tracks.iter().filter(|t| !t.is_auto_generated)
    }
}

/// Sub-segment of a caption with its own timing, used for word-level highlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionPart {
    // @field: Part text, non-empty but possibly whitespace
    pub text: String,

    // @field: Elapsed time from track start to this part
    pub offset: Duration,
}

/// One validated caption entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    // @field: Caption text, non-empty but possibly whitespace
    pub text: String,

    // @field: Elapsed time from track start to this caption
    pub offset: Duration,

    // @field: Time the caption stays on screen
    pub duration: Duration,

    // @field: Timed sub-segments in source order, possibly empty
    pub parts: Vec<CaptionPart>,
}

impl Caption {
    /// Instant the caption leaves the screen
    pub fn end(&self) -> Duration {
        self.offset + self.duration
    }
}

/// One language's complete caption stream for a video
///
/// Source order is the presentation order and drives SRT sequence numbering
/// directly; captions are never re-sorted.
#[derive(Debug, Clone, Default)]
pub struct Track {
    captions: Vec<Caption>,
}

impl Track {
    /// Wrap a parsed caption sequence
    pub fn new(captions: Vec<Caption>) -> Self {
        Track { captions }
    }

    /// All captions in source order
    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    /// Number of captions
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    /// Whether the track carries no captions
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// All caption text joined with newlines
    pub fn full_text(&self) -> String {
        self.captions
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Caption track with {} entries", self.captions.len())
    }
}
