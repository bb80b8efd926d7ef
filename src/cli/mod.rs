//! CLI Module
//!
//! Command-line interface for the raw sample converter.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::batch::DEFAULT_SOUNDS_DIR;

/// raw2wav - Convert raw 8-bit signed PCM sound effects to WAV
#[derive(Parser, Debug)]
#[command(name = "raw2wav")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every raw file in a sound directory (default command)
    #[command(name = "convert")]
    Convert {
        /// Directory holding the raw samples
        #[arg(default_value = DEFAULT_SOUNDS_DIR)]
        dir: PathBuf,

        /// Report what would be converted without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Print the conversion report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a single raw file
    #[command(name = "file")]
    File {
        /// Raw 8-bit signed PCM input
        input: PathBuf,

        /// Output path (default: lower-cased input name plus .wav)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check every WAV in a directory decodes as 8-bit mono PCM
    #[command(name = "verify")]
    Verify {
        /// Directory holding the converted files
        #[arg(default_value = DEFAULT_SOUNDS_DIR)]
        dir: PathBuf,
    },
}
