//! This crate contains the source code for the binary for the game mazewalk.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::{io, path::PathBuf};

use clap::Parser;
use color_eyre::{eyre::Result, install};
use mazewalk::{load, App};

/// Command-line arguments for the maze game.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the maze file to play.
    maze_file: PathBuf,
}

fn main() -> Result<()> {
    install()?;

    let args = Args::parse();
    let (maze, warnings) = load(&args.maze_file)?;
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    let mut app = App::new(maze);
    app.run(&mut io::stdin().lock(), &mut io::stdout().lock())?;

    Ok(())
}
