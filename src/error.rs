use thiserror::Error;

/// Everything that can go wrong between a URL on stdin and transcript lines
/// on stdout. The scrape failures are kept apart (`PlayerResponseMissing`
/// vs. `PlayerResponseInvalid`) so callers can tell a page without the
/// embedded JSON from a page whose JSON did not parse.
#[derive(Debug, Error)]
pub enum TranscrapeError {
    #[error("no video id found in '{0}'")]
    InvalidUrl(String),

    #[error("no player response found in the watch page")]
    PlayerResponseMissing,

    #[error("player response is not valid JSON")]
    PlayerResponseInvalid(#[source] serde_json::Error),

    #[error("video has no caption tracks")]
    NoCaptions,

    #[error("no caption track for language code '{requested}'; available: {}", .available.join(", "))]
    LanguageNotFound {
        requested: String,
        available: Vec<String>,
    },

    #[error("request failed")]
    Http(#[from] reqwest::Error),

    #[error("timed-text request returned HTTP {0}")]
    BadStatus(u16),

    #[error("malformed timed-text document")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid pattern")]
    Pattern(#[from] regex::Error),
}
