//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "lyr")]
#[command(about = "Manual lyrics timestamping and SRT export tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run an interactive timestamping session and export SRT subtitles
    Sync(crate::sync::Args),

    /// Re-export an edited cue table (JSON or SRT) as clean SRT
    Export(crate::export::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Sync(args) => crate::sync::execute(args.try_into()?),
        Commands::Export(args) => crate::export::execute(args.try_into()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyrsync_core::recorder::DEFAULT_CUE_SECS;

    #[test]
    fn parses_sync_command() {
        let cli = Cli::parse_from(["lyr", "sync", "lyrics.txt"]);

        match &cli.command {
            Commands::Sync(crate::sync::Args {
                lyrics,
                audio: None,
                output: None,
                table: None,
                cue_secs,
            }) if lyrics.to_str() == Some("lyrics.txt") => {
                assert!((cue_secs - DEFAULT_CUE_SECS).abs() < 0.001);
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_sync_with_audio_and_output() {
        let cli = Cli::parse_from([
            "lyr", "sync", "lyrics.txt", "-a", "song.wav", "-o", "out.srt",
        ]);

        match &cli.command {
            Commands::Sync(crate::sync::Args {
                audio: Some(audio),
                output: Some(output),
                ..
            }) if audio.to_str() == Some("song.wav") && output.to_str() == Some("out.srt") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_sync_with_table_and_cue_secs() {
        let cli = Cli::parse_from([
            "lyr",
            "sync",
            "lyrics.txt",
            "--table",
            "cues.json",
            "--cue-secs",
            "3.5",
        ]);

        match &cli.command {
            Commands::Sync(crate::sync::Args {
                table: Some(table),
                cue_secs,
                ..
            }) if table.to_str() == Some("cues.json") => {
                assert!((cue_secs - 3.5).abs() < 0.001);
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_export_command() {
        let cli = Cli::parse_from(["lyr", "export", "cues.json"]);

        match &cli.command {
            Commands::Export(crate::export::Args {
                table,
                output: None,
                preview: false,
            }) if table.to_str() == Some("cues.json") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_export_with_output_and_preview() {
        let cli = Cli::parse_from(["lyr", "export", "edited.srt", "-o", "clean.srt", "--preview"]);

        match &cli.command {
            Commands::Export(crate::export::Args {
                output: Some(output),
                preview: true,
                ..
            }) if output.to_str() == Some("clean.srt") => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }
}
