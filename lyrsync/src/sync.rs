//! Sync subcommand - interactive timestamping session to SRT.

use color_eyre::Section;
use eyre::{Context, Result, eyre};
use lyrsync_core::audio;
use lyrsync_core::recorder::{DEFAULT_CUE_SECS, Recorder, RecorderState};
use lyrsync_core::srt;
use lyrsync_core::types::{Cue, LyricSheet};
use std::io::BufRead;
use std::path::PathBuf;

/// Default export file name.
const DEFAULT_OUTPUT: &str = "lyrics.srt";

const SESSION_HELP: &str = "enter = mark, p = pause, r = resume, s = restart, q = finish";

/// CLI arguments for an interactive timestamping session.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Lyrics text file, one non-blank line per cue
    pub lyrics: PathBuf,

    /// WAV file to probe for a playable duration
    #[arg(short, long)]
    pub audio: Option<PathBuf>,

    /// Output SRT path (default: lyrics.srt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the cue table as editable JSON
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Cue length in seconds appended to each mark
    #[arg(long, default_value_t = DEFAULT_CUE_SECS)]
    pub cue_secs: f64,
}

/// Resolved configuration for an interactive session.
#[derive(Debug)]
pub struct Config {
    pub lyrics: PathBuf,
    pub audio: Option<PathBuf>,
    pub output: PathBuf,
    pub table: Option<PathBuf>,
    pub cue_secs: f64,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            lyrics: args.lyrics,
            audio: args.audio,
            output: args
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            table: args.table,
            cue_secs: args.cue_secs,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let text = std::fs::read_to_string(&config.lyrics)
        .wrap_err_with(|| format!("failed to read lyrics: {:?}", config.lyrics.display()))?;

    let sheet = LyricSheet::from_text(&text);

    if sheet.is_empty() {
        return Err(eyre!("no lyric lines in {:?}", config.lyrics.display())
            .suggestion("each non-blank line of the file becomes one subtitle cue"));
    }

    tracing::info!(lines = sheet.len(), "lyrics loaded");

    // The audio is never decoded further; a probe failure only costs the
    // duration display.
    if let Some(path) = config.audio.as_deref() {
        match audio::probe_duration(path) {
            Ok(duration) => {
                tracing::info!(duration = %format_secs(duration), "audio duration")
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not read audio, continuing without duration")
            }
        }
    }

    let cues = run_session(&sheet, config.cue_secs, std::io::stdin().lock())?;

    tracing::info!(path = ?config.output.display(), cues = cues.len(), "write srt file");

    std::fs::write(&config.output, srt::encode(&cues))
        .wrap_err_with(|| format!("failed to write srt: {:?}", config.output.display()))?;

    if let Some(table) = &config.table {
        let json = serde_json::to_string_pretty(&cues)?;

        std::fs::write(table, json)
            .wrap_err_with(|| format!("failed to write cue table: {:?}", table.display()))?;

        tracing::info!(path = ?table.display(), "write cue table");
    }

    Ok(())
}

/// Drive a recorder from line-based input until every line is marked, the
/// user finishes early, or input ends.
///
/// Wrong-state commands fall through silently, same as the recorder itself:
/// they are ordinary double-presses, not failures.
fn run_session(sheet: &LyricSheet, cue_secs: f64, input: impl BufRead) -> Result<Vec<Cue>> {
    let mut recorder = Recorder::new().with_cue_secs(cue_secs);

    println!("{} lines loaded. {SESSION_HELP}", sheet.len());

    recorder.start(sheet.clone());
    prompt(&recorder);

    for line in input.lines() {
        let line = line.wrap_err("failed to read session input")?;

        match line.trim() {
            "" => {
                if let Some(cue) = recorder.mark() {
                    println!("  marked at {}", srt::format_timestamp(cue.start));
                }
            }
            "p" => {
                if recorder.pause() {
                    println!("paused");
                }
            }
            "r" => {
                if recorder.resume() {
                    println!("resumed");
                }
            }
            "s" => {
                recorder.start(sheet.clone());
                println!("restarted");
            }
            "q" => break,
            _ => println!("{SESSION_HELP}"),
        }

        if recorder.state() == RecorderState::Exhausted {
            println!("all lines marked");
            break;
        }

        prompt(&recorder);
    }

    Ok(recorder.into_cues())
}

/// Show the next line waiting to be marked.
fn prompt(recorder: &Recorder) {
    if let Some(line) = recorder.next_line() {
        println!(
            "{:>3}/{} {}",
            recorder.cursor() + 1,
            recorder.sheet().len(),
            line
        );
    }
}

/// Format seconds as a string with two decimal places.
fn format_secs(secs: f64) -> String {
    format!("{:.2}s", secs)
}
