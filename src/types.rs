//! Type definitions for commands, movement directions, and move outcomes.

use thiserror::Error;

/// Enumeration of the four movement directions.
///
/// This enumeration holds the directions the player can move in. Each variant corresponds to one
/// of the movement keys accepted by the command loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Movement towards the previous row.
    ///
    /// This variant represents the upward direction, bound to the 'W' key.
    Up,
    /// Movement towards the next row.
    ///
    /// This variant represents the downward direction, bound to the 'S' key.
    Down,
    /// Movement towards the previous column.
    ///
    /// This variant represents the leftward direction, bound to the 'A' key.
    Left,
    /// Movement towards the next column.
    ///
    /// This variant represents the rightward direction, bound to the 'D' key.
    Right,
}

impl Direction {
    /// Returns the `(column, row)` delta applied by this direction.
    ///
    /// This function maps each direction to the signed offset it adds to the player position, with
    /// rows growing downwards and columns growing rightwards.
    pub(crate) const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Result of a single attempted player move.
///
/// This enumeration distinguishes a completed move from one rejected by the bounds or wall checks.
/// A rejected move leaves the player position untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player advanced into the target cell.
    Moved,
    /// The target cell was a wall or outside the grid; the position is unchanged.
    Blocked,
}

/// Parsed single-character game command.
///
/// This enumeration holds the commands the command loop dispatches on. It is produced by
/// [`Command::parse`] from the raw characters read off the input stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// A movement command in one of the four directions.
    Move(Direction),
    /// A request to print the rendered map.
    ShowMap,
    /// A request to leave the game.
    Quit,
}

/// Error produced when an input character maps to no command.
///
/// This error is recoverable: the command loop reports it and prompts for the next command without
/// changing any game state.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("unrecognized command {0:?}, expected one of W/A/S/D, M or Q")]
pub(crate) struct InputError(pub(crate) char);

impl Command {
    /// Parses a single command character, case-insensitively.
    ///
    /// This function accepts the movement keys 'W', 'A', 'S' and 'D', the map key 'M' and the quit
    /// key 'Q' in either case. Any other character is rejected with an [`InputError`] carrying the
    /// offending character.
    ///
    /// # Errors
    ///
    /// - [`InputError`] when the character is not one of the recognized command keys.
    pub(crate) fn parse(input: char) -> Result<Self, InputError> {
        match input.to_ascii_lowercase() {
            'w' => Ok(Self::Move(Direction::Up)),
            's' => Ok(Self::Move(Direction::Down)),
            'a' => Ok(Self::Move(Direction::Left)),
            'd' => Ok(Self::Move(Direction::Right)),
            'm' => Ok(Self::ShowMap),
            'q' => Ok(Self::Quit),
            other => Err(InputError(other)),
        }
    }
}
