//! Export subcommand - re-export an edited cue table as clean SRT.
//!
//! The cue table written by `sync --table` (or a hand-edited SRT file) is
//! the source of truth: rows may have been reordered, retimed, inserted, or
//! deleted. The table is taken as-is and serialized with fresh sequential
//! numbering.

use eyre::{Context, Result};
use lyrsync_core::srt;
use lyrsync_core::types::Cue;
use std::path::{Path, PathBuf};

/// CLI arguments for cue table export.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Edited cue table: .json (from `sync --table`) or .srt
    pub table: PathBuf,

    /// Output SRT path (default: input with .srt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the first and last blocks of the result
    #[arg(long)]
    pub preview: bool,
}

/// Resolved configuration for cue table export.
#[derive(Debug)]
pub struct Config {
    pub table: PathBuf,
    pub output: PathBuf,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output = args
            .output
            .unwrap_or_else(|| args.table.with_extension("srt"));

        Ok(Self {
            table: args.table,
            output,
            preview: args.preview,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        input = ?config.table.display(),
        output = ?config.output.display(),
        "exporting cue table"
    );

    let cues = load_table(&config.table)?;

    std::fs::write(&config.output, srt::encode(&cues))
        .wrap_err_with(|| format!("failed to write srt: {:?}", config.output.display()))?;

    tracing::info!(cues = cues.len(), path = ?config.output.display(), "write srt file");

    if config.preview {
        print!("{}", preview(&cues, 3, 3));
    }

    Ok(())
}

/// Load an edited cue table, keyed by file extension.
fn load_table(path: &Path) -> Result<Vec<Cue>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read cue table: {:?}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("srt") => srt::decode(&content)
            .wrap_err_with(|| format!("failed to parse srt: {:?}", path.display())),
        _ => serde_json::from_str(&content)
            .wrap_err_with(|| format!("failed to parse cue table json: {:?}", path.display())),
    }
}

/// Display preview of SRT blocks (first and last entries).
fn preview(cues: &[Cue], head_count: usize, tail_count: usize) -> String {
    let encoded = srt::encode(cues);
    let blocks: Vec<&str> = encoded.split_terminator("\n\n").collect();
    let total = blocks.len();

    if total <= head_count + tail_count {
        return blocks.join("\n\n");
    }

    let mut out = blocks[..head_count].to_vec();
    out.push("...");
    out.extend(&blocks[total - tail_count..]);
    out.join("\n\n")
}
