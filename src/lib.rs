//! Library crate for mazewalk, a terminal maze navigation game.
//!
//! The game loads a rectangular character grid from a plain-text file, places the player on the
//! start marker, and steps through single-character movement commands until the player reaches an
//! exit marker or quits. The [`file_loader`] module turns files into a validated [`Maze`], the
//! [`App`] drives the command loop over any buffered input/output pair, and [`render`] produces
//! the textual view of the grid with the player overlaid.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

// `clap` is only used by the binary target; silence the lib-target
// `unused_crate_dependencies` lint as the compiler suggests.
use clap as _;

mod app;
mod file_loader;
mod maze;
mod types;
mod ui;

pub use app::{App, Outcome};
pub use file_loader::{load, parse, LoadError, LoadWarning, MAX_SIDE, MIN_SIDE};
pub use maze::Maze;
pub use types::{Direction, MoveOutcome};
pub use ui::render;
