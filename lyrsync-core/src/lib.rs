//! lyrsync-core: manual lyrics timestamping session and SRT codec.
//!
//! This crate holds the logic of a lyrics-to-audio alignment tool: a state
//! machine that captures timestamps for lyric lines as the user marks them
//! against a running clock, and a codec that turns the captured cue table
//! into SRT subtitle text (and back). Anything interactive — playback,
//! editing, key handling — belongs to the caller.
//!
//! # Architecture
//!
//! - [`recorder::Recorder`]: start/pause/resume/mark lifecycle, pause-aware
//!   elapsed-time math, cursor over the lyric sheet
//! - [`srt`]: `encode`/`decode` between `Vec<Cue>` and SubRip text
//! - [`types`]: [`types::Cue`] and [`types::LyricSheet`]
//! - [`audio`]: WAV duration probe for the session display
//!
//! # Quick Start
//!
//! ```
//! use lyrsync_core::recorder::Recorder;
//! use lyrsync_core::srt;
//! use lyrsync_core::types::LyricSheet;
//!
//! let sheet = LyricSheet::from_text("first line\nsecond line");
//!
//! let mut recorder = Recorder::new();
//! recorder.start(sheet);
//! while recorder.mark().is_some() {}
//!
//! let srt_text = srt::encode(recorder.cues());
//! assert!(srt_text.starts_with("1\n"));
//! ```

pub mod audio;
pub mod error;
pub mod recorder;
pub mod srt;
pub mod types;
