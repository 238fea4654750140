use crate::error::TranscrapeError;

use regex::Regex;
use serde::Deserialize;

/// The inline script assignment carrying the player response JSON, captured
/// non-greedily up to the first statement terminator. The second variant
/// only loosens the whitespace around the `=`; both are kept because page
/// builds have been observed with either shape.
const PLAYER_RESPONSE_PATTERNS: [&str; 2] = [
    r"var ytInitialPlayerResponse = (\{.*?\});",
    r"ytInitialPlayerResponse\s*=\s*(\{.*?\});",
];

#[derive(Debug, Deserialize)]
pub struct PlayerResponse {
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
struct TracklistRenderer {
    #[serde(rename = "captionTracks")]
    tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Debug, Deserialize)]
pub struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "languageCode")]
    pub language_code: String,
    name: Option<TrackName>,
}

#[derive(Debug, Deserialize)]
struct TrackName {
    #[serde(rename = "simpleText")]
    simple_text: Option<String>,
}

impl PlayerResponse {
    /// Walks `captions.playerCaptionsTracklistRenderer.captionTracks`. Any
    /// key absent along the way means the video exposes no caption list.
    pub fn caption_tracks(&self) -> Option<&[CaptionTrack]> {
        self.captions.as_ref()?.renderer.as_ref()?.tracks.as_deref()
    }
}

impl CaptionTrack {
    pub fn display_name(&self) -> &str {
        self.name
            .as_ref()
            .and_then(|n| n.simple_text.as_deref())
            .unwrap_or("Unknown")
    }
}

/// Scans the watch-page HTML for the embedded player response and parses it.
/// The fallback pattern is only tried when the primary one finds nothing; a
/// match whose capture fails to parse is reported as invalid, not retried.
pub fn extract_player_response(html: &str) -> Result<PlayerResponse, TranscrapeError> {
    for pattern in PLAYER_RESPONSE_PATTERNS {
        let re = Regex::new(pattern)?;
        if let Some(json) = re.captures(html).and_then(|c| c.get(1)) {
            return serde_json::from_str(json.as_str())
                .map_err(TranscrapeError::PlayerResponseInvalid);
        }
    }
    Err(TranscrapeError::PlayerResponseMissing)
}

/// First track whose language code equals `language` exactly. There is no
/// locale fallback: "en" does not match "en-GB".
pub fn find_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
    tracks.iter().find(|t| t.language_code == language)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACKS_JSON: &str = r#"var ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://timedtext.example/x","languageCode":"en","name":{"simpleText":"English"}},{"baseUrl":"https://timedtext.example/y","languageCode":"fr"}]}}};"#;

    #[test]
    fn extracts_with_primary_pattern() {
        let html = r#"<script>var ytInitialPlayerResponse = {"a":1};</script>"#;

        let response = extract_player_response(html).unwrap();

        assert!(response.caption_tracks().is_none());
    }

    #[test]
    fn extracts_with_fallback_pattern() {
        let html = r#"<script>window.ytInitialPlayerResponse={"a":1};</script>"#;

        let response = extract_player_response(html).unwrap();

        assert!(response.caption_tracks().is_none());
    }

    #[test]
    fn missing_assignment_is_reported() {
        let html = "<html><body>nothing embedded here</body></html>";

        let err = extract_player_response(html).unwrap_err();

        assert!(matches!(err, TranscrapeError::PlayerResponseMissing));
    }

    #[test]
    fn broken_json_is_reported() {
        let html = "var ytInitialPlayerResponse = {broken};";

        let err = extract_player_response(html).unwrap_err();

        assert!(matches!(err, TranscrapeError::PlayerResponseInvalid(_)));
    }

    #[test]
    fn walks_to_caption_tracks() {
        let response = extract_player_response(TRACKS_JSON).unwrap();

        let tracks = response.caption_tracks().unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].language_code, "en");
        assert_eq!(tracks[0].display_name(), "English");
        assert_eq!(tracks[1].display_name(), "Unknown");
    }

    #[test]
    fn selects_exact_language_match() {
        let response = extract_player_response(TRACKS_JSON).unwrap();
        let tracks = response.caption_tracks().unwrap();

        let track = find_track(tracks, "fr").unwrap();

        assert_eq!(track.base_url, "https://timedtext.example/y");
    }

    #[test]
    fn unknown_language_selects_nothing() {
        let response = extract_player_response(TRACKS_JSON).unwrap();
        let tracks = response.caption_tracks().unwrap();

        assert!(find_track(tracks, "de").is_none());
    }
}
