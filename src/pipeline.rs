use crate::error::TranscrapeError;
use crate::fetch::{self, Fetch};
use crate::player;
use crate::timedtext;
use crate::transcript::TranscriptEntry;
use crate::video;

use log::{debug, info};

/// Runs the whole chain for one video: extract the id, fetch the watch page,
/// dig out the player response, pick the requested caption track and
/// download its timed text. The first failing step ends the run; there are
/// no retries.
pub fn get_transcript<F: Fetch>(
    fetcher: &F,
    url: &str,
    language: &str,
) -> Result<Vec<TranscriptEntry>, TranscrapeError> {
    let video_id = video::extract_video_id(url)?
        .ok_or_else(|| TranscrapeError::InvalidUrl(url.to_string()))?;
    debug!("video id {}", video_id);

    let html = fetch::watch_page(fetcher, video_id)?;
    let player_response = player::extract_player_response(&html)?;

    let tracks = player_response
        .caption_tracks()
        .filter(|t| !t.is_empty())
        .ok_or(TranscrapeError::NoCaptions)?;
    for track in tracks {
        info!("caption track {} ({})", track.language_code, track.display_name());
    }

    let track =
        player::find_track(tracks, language).ok_or_else(|| TranscrapeError::LanguageNotFound {
            requested: language.to_string(),
            available: tracks.iter().map(|t| t.language_code.clone()).collect(),
        })?;

    timedtext::fetch_transcript(fetcher, &track.base_url)
}
