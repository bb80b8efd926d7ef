//! raw2wav CLI
//!
//! Converts the raw signed PCM sound effects in `data/sounds` into WAV files
//! the engine's asset loader can read.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use raw2wav::batch::DEFAULT_SOUNDS_DIR;
use raw2wav::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("raw2wav v{}", env!("CARGO_PKG_VERSION"));

    let command = cli.command.unwrap_or(Commands::Convert {
        dir: DEFAULT_SOUNDS_DIR.into(),
        dry_run: false,
        json: false,
    });

    handle_command(command)
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Convert { dir, dry_run, json } => commands::convert(&dir, dry_run, json)
            .with_context(|| format!("converting {}", dir.display())),
        Commands::File { input, output } => commands::convert_file(&input, output.as_deref())
            .with_context(|| format!("converting {}", input.display())),
        Commands::Verify { dir } => {
            commands::verify(&dir).with_context(|| format!("verifying {}", dir.display()))
        }
    }
}
