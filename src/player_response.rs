use serde::Deserialize;

// @module: Raw upstream document shapes
//
// Everything here is deserialized exactly as the platform sends it, with every
// field optional. Validation happens at the catalog/track-parser boundary, not
// here, so absence never panics and never leaks into the internal model.

/// Top-level player response document for one video
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayerResponse {
    // @field: Captions section, absent when the video has no tracks
    #[serde(default)]
    pub captions: Option<RawCaptionsSection>,
}

impl RawPlayerResponse {
    /// Caption track records in upstream document order
    ///
    /// The upstream order is semantically meaningful: the platform lists a
    /// preferred/default track first.
    pub fn caption_tracks(&self) -> &[RawCaptionTrack] {
        self.captions
            .as_ref()
            .and_then(|c| c.renderer.as_ref())
            .map(|r| r.caption_tracks.as_slice())
            .unwrap_or_default()
    }
}

/// `captions` object of the player response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCaptionsSection {
    #[serde(default, rename = "playerCaptionsTracklistRenderer")]
    pub renderer: Option<RawCaptionTracklist>,
}

/// `playerCaptionsTracklistRenderer` object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCaptionTracklist {
    #[serde(default, rename = "captionTracks")]
    pub caption_tracks: Vec<RawCaptionTrack>,
}

/// One caption track record of the player response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCaptionTrack {
    // @field: Fetchable track URL
    #[serde(default, rename = "baseUrl")]
    pub base_url: Option<String>,

    // @field: ISO-style language code, e.g. "en" or "en-US"
    #[serde(default, rename = "languageCode")]
    pub language_code: Option<String>,

    // @field: Human-readable language name
    #[serde(default)]
    pub name: Option<RawTrackName>,

    // @field: Track kind, "asr" marks auto-generated tracks
    #[serde(default)]
    pub kind: Option<String>,
}

impl RawCaptionTrack {
    /// Resolved display name, joining text runs when no simple text is present
    pub fn language_name(&self) -> Option<String> {
        let name = self.name.as_ref()?;
        if let Some(simple) = &name.simple_text {
            return Some(simple.clone());
        }
        let joined: String = name.runs.iter().filter_map(|r| r.text.as_deref()).collect();
        if joined.is_empty() { None } else { Some(joined) }
    }

    /// Whether the upstream flagged this track as speech-recognition generated
    pub fn is_auto_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

/// Track name container, either `simpleText` or a list of `runs`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrackName {
    #[serde(default, rename = "simpleText")]
    pub simple_text: Option<String>,

    #[serde(default)]
    pub runs: Vec<RawTextRun>,
}

/// One text run of a composite track name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTextRun {
    #[serde(default)]
    pub text: Option<String>,
}

/// Raw caption track document (json3 format)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrackDocument {
    // @field: Caption events in presentation order
    #[serde(default)]
    pub events: Vec<RawCaptionEvent>,
}

/// One caption event of a track document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCaptionEvent {
    // @field: Start offset in milliseconds since track start
    #[serde(default, rename = "tStartMs")]
    pub start_ms: Option<u64>,

    // @field: Display duration in milliseconds
    #[serde(default, rename = "dDurationMs")]
    pub duration_ms: Option<u64>,

    // @field: Full event text, absent on segment-only events
    #[serde(default)]
    pub text: Option<String>,

    // @field: Timed sub-segments, word-level on ASR tracks
    #[serde(default, rename = "segs")]
    pub segments: Vec<RawCaptionSegment>,
}

impl RawCaptionEvent {
    /// Full event text, falling back to the concatenation of segment texts
    pub fn resolved_text(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        self.segments
            .iter()
            .filter_map(|s| s.text.as_deref())
            .collect()
    }
}

/// One text segment of a caption event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCaptionSegment {
    // @field: Segment text
    #[serde(default, rename = "utf8")]
    pub text: Option<String>,

    // @field: Offset in milliseconds relative to the event start
    #[serde(default, rename = "tOffsetMs")]
    pub offset_ms: Option<u64>,
}
