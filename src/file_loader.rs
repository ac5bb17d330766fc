//! File loading and validation for maze grid files.
//!
//! This module turns a plain-text maze file into a [`Maze`], enforcing the supported size range
//! and the presence of a start marker. Parsing is separated from filesystem access so the
//! validation logic can be exercised on string literals.

use std::{fs, path::Path};

use thiserror::Error;

use crate::maze::{Maze, EXIT, START};

/// Smallest accepted side length for a maze grid.
pub const MIN_SIDE: usize = 5;

/// Largest accepted side length for a maze grid.
///
/// Rows longer than this are truncated and rows beyond this count are dropped, both with a
/// warning; the grid itself is sized exactly to the content that survives.
pub const MAX_SIDE: usize = 100;

/// Errors that abort a maze load.
///
/// This enumeration holds every fatal condition the loader can report. All of them end the
/// program with a failure exit code; none of them leave a partially usable maze behind.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The maze file could not be opened or read.
    #[error("failed to read maze file")]
    Io(#[from] std::io::Error),
    /// The parsed grid's sides fall outside the supported range.
    #[error(
        "invalid maze dimensions {width}x{height}, each side must lie within [{min},{max}]",
        min = MIN_SIDE,
        max = MAX_SIDE
    )]
    InvalidDimensions {
        /// Number of columns in the first row.
        width: usize,
        /// Number of rows read from the file.
        height: usize,
    },
    /// A row's length differs from the first row's.
    #[error("row {row} is {len} cells wide, expected {expected} like the first row")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row, which sets the grid width.
        expected: usize,
    },
    /// No start marker was found anywhere in the grid.
    #[error("no start marker 'S' found in the maze")]
    MissingStart,
}

/// Non-fatal findings reported alongside a successful load.
///
/// This enumeration holds the conditions the loader tolerates with a warning. The caller decides
/// where to surface them; the binary prints them to stderr before the game starts.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LoadWarning {
    /// A row exceeded the maximum width and lost its tail.
    #[error("row {row} is longer than {max} cells and was truncated", max = MAX_SIDE)]
    RowTruncated {
        /// Zero-based index of the truncated row.
        row: usize,
    },
    /// The file held more rows than the maximum height; the rest were not read.
    #[error("maze has more than {max} rows, the remaining lines were dropped", max = MAX_SIDE)]
    RowsDropped,
    /// More than one start marker was present; only the first one counts.
    #[error("{count} extra start marker(s) ignored, the first 'S' wins")]
    ExtraStartMarkers {
        /// Number of ignored start markers.
        count: usize,
    },
    /// No exit marker was present anywhere in the grid.
    #[error("maze has no exit marker 'E', the game cannot be won")]
    NoExitMarker,
}

/// Loads a maze from a file on disk.
///
/// This function reads the whole file into memory and delegates to [`parse`]. Warnings produced
/// during parsing are passed through for the caller to report.
///
/// # Errors
///
/// - [`LoadError::Io`] when the file cannot be opened or read.
/// - Any error [`parse`] reports for the file's contents.
pub fn load(path: &Path) -> Result<(Maze, Vec<LoadWarning>), LoadError> {
    let contents = fs::read_to_string(path)?;

    parse(&contents)
}

/// Parses maze file contents into a validated [`Maze`].
///
/// This function builds one grid row per input line, with each line's trailing newline already
/// stripped by the line iterator. Overlong rows are truncated and surplus rows dropped, both with
/// a warning. The grid is then checked against the supported size range, rectangularity, and the
/// presence of a start marker; the first 'S' in row-major order becomes the player position.
///
/// # Errors
///
/// - [`LoadError::InvalidDimensions`] when height or width falls outside
///   [`MIN_SIDE`]..=[`MAX_SIDE`].
/// - [`LoadError::RaggedRow`] when a row's length differs from the first row's.
/// - [`LoadError::MissingStart`] when no 'S' exists in the grid.
pub fn parse(input: &str) -> Result<(Maze, Vec<LoadWarning>), LoadError> {
    let mut warnings = Vec::new();
    let mut grid: Vec<Vec<char>> = Vec::new();

    for (row_idx, line) in input.lines().enumerate() {
        if grid.len() == MAX_SIDE {
            warnings.push(LoadWarning::RowsDropped);
            break;
        }

        let mut row: Vec<char> = line.chars().collect();
        if row.len() > MAX_SIDE {
            row.truncate(MAX_SIDE);
            warnings.push(LoadWarning::RowTruncated { row: row_idx });
        }

        grid.push(row);
    }

    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    if !(MIN_SIDE..=MAX_SIDE).contains(&height) || !(MIN_SIDE..=MAX_SIDE).contains(&width) {
        return Err(LoadError::InvalidDimensions { width, height });
    }

    for (row_idx, row) in grid.iter().enumerate() {
        if row.len() != width {
            return Err(LoadError::RaggedRow {
                row: row_idx,
                len: row.len(),
                expected: width,
            });
        }
    }

    let mut start = None;
    let mut start_count: usize = 0;
    let mut exit_count: usize = 0;
    for (row_idx, row) in grid.iter().enumerate() {
        for (col_idx, &cell) in row.iter().enumerate() {
            if cell == START {
                start_count += 1;
                if start.is_none() {
                    start = Some((col_idx, row_idx));
                }
            } else if cell == EXIT {
                exit_count += 1;
            }
        }
    }

    let Some((player_col, player_row)) = start else {
        return Err(LoadError::MissingStart);
    };
    if start_count > 1 {
        warnings.push(LoadWarning::ExtraStartMarkers {
            count: start_count - 1,
        });
    }
    if exit_count == 0 {
        warnings.push(LoadWarning::NoExitMarker);
    }

    Ok((Maze::new(grid, player_col, player_row), warnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_maze() {
        let input = "#####\n#S.E#\n#...#\n#...#\n#####";

        let (maze, warnings) = parse(input).expect("maze should load");

        assert_eq!(maze.width(), 5);
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.player(), (1, 1));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_trailing_newline_is_stripped() {
        let input = "#####\n#S.E#\n#...#\n#...#\n#####\n";

        let (maze, _warnings) = parse(input).expect("maze should load");

        assert_eq!(maze.height(), 5);
    }

    #[test]
    fn test_parse_first_start_marker_wins() {
        let input = "#####\n#.S.#\n#.S.#\n#..E#\n#####";

        let (maze, warnings) = parse(input).expect("maze should load");

        assert_eq!(maze.player(), (2, 1));
        assert_eq!(warnings, vec![LoadWarning::ExtraStartMarkers { count: 1 }]);
    }

    #[test]
    fn test_parse_missing_start_fails() {
        let input = "#####\n#..E#\n#...#\n#...#\n#####";

        let result = parse(input);

        assert!(matches!(result, Err(LoadError::MissingStart)));
    }

    #[test]
    fn test_parse_height_below_minimum_fails() {
        let input = "#####\n#S.E#\n#####";

        let result = parse(input);

        assert!(matches!(
            result,
            Err(LoadError::InvalidDimensions {
                width: 5,
                height: 3
            })
        ));
    }

    #[test]
    fn test_parse_width_below_minimum_fails() {
        let input = "###\n#S#\n#.#\n#E#\n###";

        let result = parse(input);

        assert!(matches!(
            result,
            Err(LoadError::InvalidDimensions {
                width: 3,
                height: 5
            })
        ));
    }

    #[test]
    fn test_parse_empty_input_fails() {
        let result = parse("");

        assert!(matches!(
            result,
            Err(LoadError::InvalidDimensions {
                width: 0,
                height: 0
            })
        ));
    }

    #[test]
    fn test_parse_ragged_row_fails() {
        let input = "#####\n#S.E#\n#..#\n#...#\n#####";

        let result = parse(input);

        assert!(matches!(
            result,
            Err(LoadError::RaggedRow {
                row: 2,
                len: 4,
                expected: 5
            })
        ));
    }

    #[test]
    fn test_parse_overlong_row_is_truncated() {
        let open_row = format!("#{}#", ".".repeat(MAX_SIDE - 2));
        let lines = vec![
            "#".repeat(MAX_SIDE + 7),
            format!("#S{}E#", ".".repeat(MAX_SIDE - 4)),
            open_row.clone(),
            open_row,
            "#".repeat(MAX_SIDE),
        ];
        let input = lines.join("\n");

        let (maze, warnings) = parse(&input).expect("maze should load");

        assert_eq!(maze.width(), MAX_SIDE);
        assert_eq!(maze.height(), 5);
        assert_eq!(warnings, vec![LoadWarning::RowTruncated { row: 0 }]);
    }

    #[test]
    fn test_parse_surplus_rows_are_dropped() {
        let row = "#####";
        let mut lines: Vec<String> = vec![row.to_owned(); MAX_SIDE + 5];
        if let Some(second) = lines.get_mut(1) {
            "#S.E#".clone_into(second);
        }
        let input = lines.join("\n");

        let (maze, warnings) = parse(&input).expect("maze should load");

        assert_eq!(maze.height(), MAX_SIDE);
        assert_eq!(warnings, vec![LoadWarning::RowsDropped]);
    }

    #[test]
    fn test_parse_no_exit_marker_warns() {
        let input = "#####\n#S..#\n#...#\n#...#\n#####";

        let (_maze, warnings) = parse(input).expect("maze should load");

        assert_eq!(warnings, vec![LoadWarning::NoExitMarker]);
    }

    #[test]
    fn test_parse_non_wall_characters_are_open_floor() {
        let input = "#####\n#S~E#\n#.o.#\n#...#\n#####";

        let (maze, _warnings) = parse(input).expect("maze should load");

        assert_eq!(maze.cell(2, 1), Some('~'));
        assert_eq!(maze.cell(2, 2), Some('o'));
    }

    #[test]
    fn test_load_missing_file_fails_with_io_error() {
        let result = load(Path::new("definitely/not/a/real/maze.txt"));

        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
