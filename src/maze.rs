//! Maze data and player state module.
//!
//! This module contains the [`Maze`] struct holding the loaded grid together with the player
//! position, and the movement validation and exit detection the command loop relies on.

use crate::types::{Direction, MoveOutcome};

/// Grid character that blocks movement.
pub(crate) const WALL: char = '#';

/// Grid character marking the player's initial cell.
pub(crate) const START: char = 'S';

/// Grid character marking a winning cell.
pub(crate) const EXIT: char = 'E';

/// Maze grid and player position container.
///
/// This structure holds the character grid produced by the loader along with the derived
/// dimensions and the current player coordinates. It is constructed once per program run and
/// mutated in place by each successful move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Grid content as rows of cells.
    ///
    /// This field holds the maze as a vector of rows, each row a vector of cell characters. All
    /// rows have the same length; the loader rejects ragged input before construction.
    grid: Vec<Vec<char>>,
    /// Number of columns in the grid.
    width: usize,
    /// Number of rows in the grid.
    height: usize,
    /// Column index of the player's current cell.
    player_col: usize,
    /// Row index of the player's current cell.
    player_row: usize,
}

impl Maze {
    /// Builds a maze from a validated grid and a starting position.
    ///
    /// This function derives the dimensions from the grid it is given. The loader guarantees the
    /// grid is rectangular, within the supported size range, and that the starting position names
    /// an in-bounds cell.
    pub(crate) fn new(grid: Vec<Vec<char>>, player_col: usize, player_row: usize) -> Self {
        let width = grid.first().map_or(0, Vec::len);
        let height = grid.len();

        Self {
            grid,
            width,
            height,
            player_col,
            player_row,
        }
    }

    /// Returns the number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the player position as a `(column, row)` pair.
    #[must_use]
    pub const fn player(&self) -> (usize, usize) {
        (self.player_col, self.player_row)
    }

    /// Returns the character stored at the given cell, if it is within the grid.
    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        self.grid.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Returns the grid rows for rendering.
    pub(crate) fn rows(&self) -> &[Vec<char>] {
        &self.grid
    }

    /// Checks whether the player may move by the given delta.
    ///
    /// This function is true iff the target cell lies within the grid bounds and does not hold a
    /// wall character. Deltas that would take either coordinate below zero are out of bounds.
    #[must_use]
    pub fn is_valid_move(&self, delta_col: isize, delta_row: isize) -> bool {
        self.target(delta_col, delta_row)
            .and_then(|(col, row)| self.cell(col, row))
            .is_some_and(|cell| cell != WALL)
    }

    /// Attempts to move the player one step in the given direction.
    ///
    /// This function applies the direction's delta only when [`Maze::is_valid_move`] holds.
    /// A rejected move reports [`MoveOutcome::Blocked`] and leaves the position untouched.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let (delta_col, delta_row) = direction.delta();

        if self.is_valid_move(delta_col, delta_row) {
            // is_valid_move already bounds-checked the target, so saturation never kicks in.
            self.player_col = self.player_col.saturating_add_signed(delta_col);
            self.player_row = self.player_row.saturating_add_signed(delta_row);
            MoveOutcome::Moved
        } else {
            MoveOutcome::Blocked
        }
    }

    /// Checks whether the player currently stands on an exit cell.
    ///
    /// This function compares the character stored at the player's cell against the exit marker.
    /// The start marker stays in the grid after loading, so the starting cell never counts as an
    /// exit.
    #[must_use]
    pub fn is_at_exit(&self) -> bool {
        self.cell(self.player_col, self.player_row) == Some(EXIT)
    }

    /// Computes the cell the given delta points at, if it stays within bounds.
    fn target(&self, delta_col: isize, delta_row: isize) -> Option<(usize, usize)> {
        let col = self.player_col.checked_add_signed(delta_col)?;
        let row = self.player_row.checked_add_signed(delta_row)?;

        (col < self.width && row < self.height).then_some((col, row))
    }
}
