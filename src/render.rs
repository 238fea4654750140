use crate::transcript::TranscriptEntry;

use std::io::Write;

use anyhow::{Context, Result};

/// Renders a start offset as a zero-padded clock time. The fractional part
/// is truncated, not rounded: 59.9 seconds is still 00:00:59.
pub fn format_time(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// A duration keeps its sub-second precision, fixed to two decimal places.
pub fn format_duration(seconds: f64) -> String {
    format!("{:.2}", seconds)
}

pub fn render<W: Write>(out: &mut W, entries: &[TranscriptEntry]) -> Result<()> {
    for entry in entries {
        write_entry(out, entry).context("Failed to write transcript line")?;
    }
    Ok(())
}

fn write_entry<W: Write>(out: &mut W, entry: &TranscriptEntry) -> Result<()> {
    writeln!(
        out,
        "{} - {}: {}",
        format_time(entry.start),
        format_duration(entry.duration),
        entry.text
    )?;
    Ok(())
}
