/*!
 * Tests for video reference resolution
 */

use ytcaps::caption_client::resolve_video_id;

/// Test resolution of the common URL shapes
#[test]
fn test_resolve_video_id_withUrlForms_shouldExtractId() {
    assert_eq!(
        resolve_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
        "dQw4w9WgXcQ"
    );
    assert_eq!(
        resolve_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap(),
        "dQw4w9WgXcQ"
    );
    assert_eq!(
        resolve_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap(),
        "dQw4w9WgXcQ"
    );
    assert_eq!(
        resolve_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ").unwrap(),
        "dQw4w9WgXcQ"
    );
    assert_eq!(
        resolve_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap(),
        "dQw4w9WgXcQ"
    );
}

/// Test resolution of a bare id
#[test]
fn test_resolve_video_id_withBareId_shouldReturnIdUnchanged() {
    assert_eq!(resolve_video_id("dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
    assert_eq!(resolve_video_id("  dQw4w9WgXcQ  ").unwrap(), "dQw4w9WgXcQ");
}

/// Test rejection of unrecognizable references
#[test]
fn test_resolve_video_id_withInvalidReference_shouldFail() {
    assert!(resolve_video_id("").is_err());
    assert!(resolve_video_id("too-short").is_err());
    assert!(resolve_video_id("https://example.com/page").is_err());
    assert!(resolve_video_id("way-too-long-to-be-a-video-id").is_err());
}
