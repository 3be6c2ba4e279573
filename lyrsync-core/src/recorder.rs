//! Timestamp capture state machine for manual lyric alignment.
//!
//! A [`Recorder`] turns a sequence of discrete mark events, each tied to a
//! monotonic clock instant, into an ordered cue table. It owns the
//! start/pause/resume/restart lifecycle; the driving UI only forwards button
//! presses. Wrong-state calls are silent no-ops because they come from
//! controls the user can press at any time.

use std::time::Instant;

use crate::types::{Cue, LyricSheet};

/// Default cue length in seconds appended to each mark.
///
/// A placeholder so every marked line immediately has a valid interval
/// before manual refinement. Intentionally not smart: no look-ahead to the
/// next mark.
pub const DEFAULT_CUE_SECS: f64 = 2.0;

/// Recorder lifecycle state, derived from the session fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecorderState {
    /// No session started yet.
    Idle,
    /// Session active, marks accepted.
    Running,
    /// Session active but the clock is held.
    Paused,
    /// Every lyric line has been marked.
    Exhausted,
}

/// Manual timestamping session.
///
/// Elapsed time is always measured against an adjusted clock anchor: on
/// resume the anchor is shifted forward by the pause duration, so paused
/// time never leaks into captured timestamps.
///
/// Each transition has an `*_at` form taking the instant explicitly, used
/// by tests and replayable drivers, plus a wall-clock convenience wrapper.
#[derive(Debug)]
pub struct Recorder {
    sheet: LyricSheet,
    cues: Vec<Cue>,
    cursor: usize,
    clock_anchor: Option<Instant>,
    // occupied while paused; doubles as the paused flag
    pause_anchor: Option<Instant>,
    cue_secs: f64,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    /// Create an idle recorder with the default cue length.
    pub fn new() -> Self {
        Self {
            sheet: LyricSheet::default(),
            cues: Vec::new(),
            cursor: 0,
            clock_anchor: None,
            pause_anchor: None,
            cue_secs: DEFAULT_CUE_SECS,
        }
    }

    /// Override the default cue length in seconds.
    pub fn with_cue_secs(mut self, cue_secs: f64) -> Self {
        self.cue_secs = cue_secs;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RecorderState {
        if self.clock_anchor.is_none() {
            RecorderState::Idle
        } else if self.pause_anchor.is_some() {
            RecorderState::Paused
        } else if self.cursor >= self.sheet.len() {
            RecorderState::Exhausted
        } else {
            RecorderState::Running
        }
    }

    /// Index of the next unmarked lyric line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The next line to be marked, if any remain.
    pub fn next_line(&self) -> Option<&str> {
        self.sheet.get(self.cursor)
    }

    /// The lyric sheet of the current session.
    pub fn sheet(&self) -> &LyricSheet {
        &self.sheet
    }

    /// Captured cues in insertion order.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Consume the recorder, returning the cue table.
    pub fn into_cues(self) -> Vec<Cue> {
        self.cues
    }

    /// Replace the cue table wholesale with an externally edited copy.
    ///
    /// Lifecycle state and cursor are untouched; the edited table simply
    /// becomes the new source of truth for the next export.
    pub fn set_cues(&mut self, cues: Vec<Cue>) {
        tracing::debug!(len = cues.len(), "cue table replaced");
        self.cues = cues;
    }

    /// Start or restart a session with `sheet`, discarding any prior state.
    pub fn start(&mut self, sheet: LyricSheet) {
        self.start_at(sheet, Instant::now());
    }

    /// [`Self::start`] with an explicit clock instant.
    pub fn start_at(&mut self, sheet: LyricSheet, now: Instant) {
        tracing::debug!(lines = sheet.len(), "session started");

        self.sheet = sheet;
        self.cues.clear();
        self.cursor = 0;
        self.clock_anchor = Some(now);
        self.pause_anchor = None;
    }

    /// Pause the clock. Returns false as a no-op unless running.
    pub fn pause(&mut self) -> bool {
        self.pause_at(Instant::now())
    }

    /// [`Self::pause`] with an explicit clock instant.
    pub fn pause_at(&mut self, now: Instant) -> bool {
        if self.state() != RecorderState::Running {
            return false;
        }

        tracing::debug!("session paused");
        self.pause_anchor = Some(now);
        true
    }

    /// Resume the clock. Returns false as a no-op unless paused.
    pub fn resume(&mut self) -> bool {
        self.resume_at(Instant::now())
    }

    /// [`Self::resume`] with an explicit clock instant.
    pub fn resume_at(&mut self, now: Instant) -> bool {
        let (Some(anchor), Some(paused_at)) = (self.clock_anchor, self.pause_anchor) else {
            return false;
        };

        // shift the anchor forward so the pause never counts as elapsed
        self.clock_anchor = Some(anchor + (now - paused_at));
        self.pause_anchor = None;

        tracing::debug!("session resumed");
        true
    }

    /// Mark the next lyric line at the current elapsed time.
    ///
    /// Appends a cue spanning `elapsed..elapsed + cue_secs` and advances the
    /// cursor. Returns the new cue, or `None` as a no-op when not running or
    /// when every line is already marked.
    pub fn mark(&mut self) -> Option<&Cue> {
        self.mark_at(Instant::now())
    }

    /// [`Self::mark`] with an explicit clock instant.
    pub fn mark_at(&mut self, now: Instant) -> Option<&Cue> {
        if self.state() != RecorderState::Running {
            return None;
        }

        let anchor = self.clock_anchor?;
        let text = self.sheet.get(self.cursor)?;
        let elapsed = (now - anchor).as_secs_f64();

        tracing::debug!(
            line = self.cursor + 1,
            total = self.sheet.len(),
            elapsed,
            "line marked"
        );

        self.cues.push(Cue::new(text, elapsed, elapsed + self.cue_secs));
        self.cursor += 1;

        self.cues.last()
    }
}
