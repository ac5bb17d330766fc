//! Rendering of the maze grid to plain text.

use crate::maze::Maze;

/// Character drawn at the player's cell.
///
/// The player marker always replaces whatever the grid stores underneath, so a player standing on
/// an exit cell renders as the marker, not the exit character.
const PLAYER: char = 'X';

/// Renders the maze with the player's position overlaid.
///
/// This function emits the grid row by row, each cell as its stored character except the player's
/// current cell, which is drawn as [`PLAYER`]. Every row ends with a newline.
#[must_use]
pub fn render(maze: &Maze) -> String {
    let (player_col, player_row) = maze.player();
    let mut out = String::with_capacity((maze.width() + 1) * maze.height());

    for (row_idx, row) in maze.rows().iter().enumerate() {
        for (col_idx, &cell) in row.iter().enumerate() {
            if (col_idx, row_idx) == (player_col, player_row) {
                out.push(PLAYER);
            } else {
                out.push(cell);
            }
        }
        out.push('\n');
    }

    out
}
