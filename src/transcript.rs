/// One caption cue as emitted by the timed-text document: a start offset and
/// a duration in fractional seconds, and the cue text with embedded line
/// breaks flattened to spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub start: f64,
    pub duration: f64,
    pub text: String,
}
