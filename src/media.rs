//! Pure media-URL parsing: canonical video identifier and thumbnail derivation.
//!
//! Recognizes the known YouTube URL shapes (short-link, embed, watch-parameter,
//! legacy path forms) and derives a thumbnail URL at a requested quality tier.
//! No network access; callers can use these from any renderer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::ThumbnailQuality;

/// Canonical video identifiers are exactly 11 characters; anything else is
/// treated as a non-match rather than a guess.
const VIDEO_ID_LEN: usize = 11;

/// One pattern covering all recognized markers; the capture is the token
/// following the marker, terminated by `#`, `&` or `?`.
static VIDEO_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*)")
        .expect("video id pattern should compile")
});

/// Extract the canonical video identifier from a media URL.
///
/// Returns `None` for unrecognized URL shapes and for captured tokens whose
/// length is not exactly 11 characters, even when a superficially
/// identifier-like token is present.
pub fn extract_video_id(url: &str) -> Option<String> {
    // The last marker wins when a URL carries more than one (e.g. `&v=`
    // overriding an earlier `watch?v=`).
    let captures = VIDEO_ID_PATTERN.captures_iter(url).last()?;
    let token = captures.get(1)?.as_str();

    if token.chars().count() == VIDEO_ID_LEN {
        Some(token.to_string())
    } else {
        None
    }
}

/// Derive a thumbnail URL for a media URL at the given quality tier.
///
/// Returns the empty string when no identifier can be extracted, so callers
/// can treat `""` uniformly as "no thumbnail". Never fails.
pub fn thumbnail_url(url: &str, quality: ThumbnailQuality) -> String {
    match extract_video_id(url) {
        Some(id) => format!("https://img.youtube.com/vi/{}/{}.jpg", id, quality.as_str()),
        None => String::new(),
    }
}
