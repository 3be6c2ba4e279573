//! SRT subtitle codec.
//!
//! Serializes cue tables into SubRip blocks and parses edited SRT text back
//! into cues. Block order follows table order: indices are renumbered
//! sequentially on every encode, never re-sorted by time.

use crate::error::{Result, SubtitleError};
use crate::types::Cue;

// Absorbs binary representation error of decimal inputs (3661.234 must land
// on millisecond 234, not 233). Far below the half-millisecond boundary, so
// the truncation policy is unaffected.
const MS_NUDGE: f64 = 1e-6;

/// Format seconds as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Milliseconds are truncated, never rounded: `59.9995` formats as
/// `00:00:59,999`. Negative input is outside the contract.
pub fn format_timestamp(seconds: f64) -> String {
    let whole = seconds as u64;
    let hours = whole / 3600;
    let mins = (whole % 3600) / 60;
    let secs = whole % 60;
    let millis = ((seconds - whole as f64) * 1000.0 + MS_NUDGE) as u64;

    format!("{hours:02}:{mins:02}:{secs:02},{:03}", millis.min(999))
}

/// Parse an SRT timestamp into seconds.
///
/// Accepts `,` or `.` as the millisecond separator and surrounding
/// whitespace. Inverse of [`format_timestamp`].
pub fn parse_timestamp(value: &str) -> Result<f64> {
    let invalid = || SubtitleError::InvalidTimestamp {
        value: value.trim().to_owned(),
    };

    let trimmed = value.trim();
    let (clock, millis) = trimmed.split_once([',', '.']).ok_or_else(invalid)?;

    let fields: Vec<u64> = clock
        .splitn(3, ':')
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| invalid())?;

    let [hours, mins, secs] = fields[..] else {
        return Err(invalid().into());
    };

    let millis: u64 = millis.parse().map_err(|_| invalid())?;

    Ok((hours * 3600 + mins * 60 + secs) as f64 + millis as f64 / 1000.0)
}

/// Serialize cues as SRT file content.
///
/// One block per cue in table order, each terminated by a blank line.
/// Out-of-order or inverted (`end < start`) cues from external edits are
/// serialized faithfully. An empty table encodes to an empty string.
pub fn encode(cues: &[Cue]) -> String {
    cues.iter()
        .zip(1..)
        .map(|(cue, index)| format_block(cue, index))
        .collect()
}

/// Format a single numbered SRT block.
fn format_block(cue: &Cue, index: usize) -> String {
    format!(
        "{index}\n{} --> {}\n{}\n\n",
        format_timestamp(cue.start),
        format_timestamp(cue.end),
        cue.text
    )
}

/// Parse SRT file content into a cue table.
///
/// Tolerates CRLF line endings and extra blank lines between blocks, and
/// keeps multi-line cue text (joined with `\n`). Stored indices must be
/// numeric but are otherwise ignored; the next [`encode`] renumbers.
pub fn decode(input: &str) -> Result<Vec<Cue>> {
    let normalized = input.replace("\r\n", "\n");

    normalized
        .split("\n\n")
        .map(|chunk| chunk.trim_matches('\n'))
        .filter(|chunk| !chunk.trim().is_empty())
        .zip(1..)
        .map(|(chunk, block)| parse_block(chunk, block))
        .collect()
}

/// Parse one `index / timing / text` block.
fn parse_block(chunk: &str, block: usize) -> Result<Cue> {
    let mut lines = chunk.lines();

    let index = lines.next().unwrap_or_default();
    index
        .trim()
        .parse::<usize>()
        .map_err(|_| SubtitleError::InvalidIndex {
            block,
            value: index.to_owned(),
        })?;

    let timing = lines.next().ok_or(SubtitleError::MissingTiming { block })?;
    let (start, end) = timing
        .split_once("-->")
        .ok_or_else(|| SubtitleError::InvalidTiming {
            block,
            value: timing.to_owned(),
        })?;

    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    let text = lines.collect::<Vec<_>>().join("\n");

    Ok(Cue { text, start, end })
}
