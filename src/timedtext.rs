use crate::error::TranscrapeError;
use crate::fetch::Fetch;
use crate::transcript::TranscriptEntry;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Downloads and parses one caption track. Unlike the watch-page fetch, a
/// non-success status here is surfaced as an error.
pub fn fetch_transcript<F: Fetch>(
    fetcher: &F,
    base_url: &str,
) -> Result<Vec<TranscriptEntry>, TranscrapeError> {
    debug!("fetching timed text {}", base_url);
    let response = fetcher.get(base_url)?;
    if !(200..300).contains(&response.status) {
        return Err(TranscrapeError::BadStatus(response.status));
    }
    parse_timed_text(&response.body)
}

/// Parses a timed-text document into cues, preserving document order. Cue
/// text is unescaped twice (XML first, then HTML entities, which YouTube
/// double-encodes) and embedded line breaks become spaces. A `<text>`
/// element missing either timing attribute is skipped.
pub fn parse_timed_text(xml: &str) -> Result<Vec<TranscriptEntry>, TranscrapeError> {
    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();
    let mut current: Option<(f64, f64)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) if e.name().as_ref() == b"text" => {
                current = cue_timing(e);
                text.clear();
            }
            // A self-closing cue still occupies its slot in the transcript.
            Event::Empty(ref e) if e.name().as_ref() == b"text" => {
                if let Some((start, duration)) = cue_timing(e) {
                    entries.push(TranscriptEntry {
                        start,
                        duration,
                        text: String::new(),
                    });
                }
            }
            Event::Text(ref e) => {
                if current.is_some() {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::End(ref e) if e.name().as_ref() == b"text" => {
                if let Some((start, duration)) = current.take() {
                    let decoded = html_escape::decode_html_entities(&text).replace('\n', " ");
                    entries.push(TranscriptEntry {
                        start,
                        duration,
                        text: decoded,
                    });
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

fn cue_timing(e: &BytesStart) -> Option<(f64, f64)> {
    let mut start = None;
    let mut dur = None;
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"start" => start = String::from_utf8_lossy(&attr.value).parse().ok(),
            b"dur" => dur = String::from_utf8_lossy(&attr.value).parse().ok(),
            _ => {}
        }
    }
    Some((start?, dur?))
}
