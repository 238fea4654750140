use crate::error::TranscrapeError;

use regex::Regex;

/// An 11-character id following a `v=` query marker or a path separator.
/// Nothing beyond the shape is checked; an id for a private or deleted video
/// only fails later, at fetch time.
const VIDEO_ID_PATTERN: &str = r"(?:v=|/)([0-9A-Za-z_-]{11})";

/// Pulls the video id out of a URL, or returns `None` when the URL carries
/// nothing that looks like one.
pub fn extract_video_id(url: &str) -> Result<Option<&str>, TranscrapeError> {
    let re = Regex::new(VIDEO_ID_PATTERN)?;
    Ok(re.captures(url).and_then(|c| c.get(1)).map(|m| m.as_str()))
}
