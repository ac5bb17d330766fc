//! Core command loop state and logic for the maze game.

use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use color_eyre::eyre::Result;

use crate::{
    maze::Maze,
    types::{Command, MoveOutcome},
    ui,
};

/// Reason the command loop stopped.
///
/// This enumeration holds the terminal states of the game. While the loop runs no outcome is set;
/// setting one ends the loop after the current iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player stepped onto an exit cell.
    Won,
    /// The player issued the quit command.
    Quit,
    /// The input stream ended before a quit or a win.
    EndOfInput,
}

/// Game state container driving the command loop.
///
/// This structure owns the maze for the lifetime of the program and holds the loop's terminal
/// state once one is reached. Input and output handles are passed into [`App::run`] so the loop
/// can be driven by in-memory buffers as easily as by the real stdin and stdout.
#[derive(Debug)]
pub struct App {
    /// The maze being played.
    ///
    /// This field holds the single maze instance for the program run. Each successful move
    /// mutates it in place.
    maze: Maze,
    /// Characters read but not yet consumed as commands.
    ///
    /// This field buffers the remainder of the last input line so that one command is consumed
    /// per loop iteration, whitespace skipped, before the next line is read.
    pending: VecDeque<char>,
    /// Terminal state of the loop, if reached.
    ///
    /// This field starts out `None` and is set exactly once; the loop in [`App::run`] stops as
    /// soon as it holds a value.
    outcome: Option<Outcome>,
}

impl App {
    /// Creates a new game over a freshly loaded maze.
    #[must_use]
    pub fn new(maze: Maze) -> Self {
        Self {
            maze,
            pending: VecDeque::new(),
            outcome: None,
        }
    }

    /// Returns the maze in its current state.
    #[must_use]
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Returns the loop's terminal state, once one is reached.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Runs the command loop until the player wins, quits, or input runs out.
    ///
    /// This function prompts for, reads, and dispatches one command per iteration. It returns to
    /// the call site once an [`Outcome`] is set; the caller decides nothing further, every
    /// user-visible message is written here.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`] when reading a command or writing a message fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(
            output,
            "Welcome to the maze! Move with W/A/S/D, show the map with M, quit with Q."
        )?;

        while self.outcome.is_none() {
            write!(output, "Enter command (W/A/S/D/M/Q): ")?;
            output.flush()?;
            self.step(input, output)?;
        }

        Ok(())
    }

    /// Reads and dispatches a single command.
    ///
    /// This function consumes one token from the input, parses it, and applies the matching
    /// action. Unrecognized characters are reported and otherwise ignored so the caller's loop
    /// re-prompts. A closed input stream sets [`Outcome::EndOfInput`] rather than erroring, so a
    /// piped game ends cleanly once its script is exhausted.
    fn step<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let Some(token) = next_token(input, &mut self.pending)? else {
            writeln!(output, "Input closed, leaving the maze.")?;
            self.outcome = Some(Outcome::EndOfInput);
            return Ok(());
        };

        match Command::parse(token) {
            Err(err) => writeln!(output, "{err}")?,
            Ok(Command::Quit) => {
                writeln!(output, "You chose to leave the maze.")?;
                self.outcome = Some(Outcome::Quit);
            }
            Ok(Command::ShowMap) => write!(output, "{}", ui::render(&self.maze))?,
            Ok(Command::Move(direction)) => match self.maze.move_player(direction) {
                MoveOutcome::Blocked => {
                    writeln!(output, "Blocked by a wall or the edge of the maze.")?;
                }
                MoveOutcome::Moved => {
                    if self.maze.is_at_exit() {
                        writeln!(output, "You found the exit, congratulations!")?;
                        self.outcome = Some(Outcome::Won);
                    }
                }
            },
        }

        Ok(())
    }
}

/// Pops the next non-whitespace character, reading further lines as needed.
///
/// This function drains the pending buffer first and only then blocks on the next input line,
/// mirroring single-character token reads over a line-buffered stream. It returns `None` once the
/// stream is exhausted.
fn next_token<R: BufRead>(input: &mut R, pending: &mut VecDeque<char>) -> Result<Option<char>> {
    loop {
        if let Some(token) = pending.pop_front() {
            return Ok(Some(token));
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        pending.extend(line.chars().filter(|ch| !ch.is_whitespace()));
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::file_loader;

    const TEST_MAZE: &str = "#####\n#S.E#\n#...#\n#...#\n#####";

    fn app() -> App {
        let (maze, warnings) = file_loader::parse(TEST_MAZE).expect("test maze should load");
        assert!(warnings.is_empty(), "test maze should load cleanly");
        App::new(maze)
    }

    fn run_with_input(input: &str) -> (App, String) {
        let mut app = app();
        let mut output = Vec::new();
        app.run(&mut Cursor::new(input), &mut output)
            .expect("command loop should not fail on in-memory buffers");
        (
            app,
            String::from_utf8(output).expect("game output should be valid UTF-8"),
        )
    }

    #[test]
    fn test_run_wins_after_two_steps_right() {
        let (app, output) = run_with_input("d\nd\n");

        assert_eq!(app.outcome(), Some(Outcome::Won));
        assert_eq!(app.maze().player(), (3, 1));
        assert!(output.contains("found the exit"));
    }

    #[test]
    fn test_run_blocked_move_keeps_position_and_continues() {
        let (app, output) = run_with_input("w\nq\n");

        assert_eq!(app.outcome(), Some(Outcome::Quit));
        assert_eq!(app.maze().player(), (1, 1));
        assert!(output.contains("Blocked"));
    }

    #[test]
    fn test_run_quit_command_ends_loop() {
        let (app, _output) = run_with_input("q\n");

        assert_eq!(app.outcome(), Some(Outcome::Quit));
    }

    #[test]
    fn test_run_uppercase_commands_are_accepted() {
        let (app, _output) = run_with_input("D\nD\n");

        assert_eq!(app.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn test_run_show_map_renders_player_marker() {
        let (app, output) = run_with_input("m\nq\n");

        assert_eq!(app.outcome(), Some(Outcome::Quit));
        assert!(output.contains("#X.E#"));
    }

    #[test]
    fn test_run_unrecognized_input_reports_and_retries() {
        let (app, output) = run_with_input("z\nq\n");

        assert_eq!(app.outcome(), Some(Outcome::Quit));
        assert_eq!(app.maze().player(), (1, 1));
        assert!(output.contains("unrecognized command"));
    }

    #[test]
    fn test_run_end_of_input_exits_cleanly() {
        let (app, output) = run_with_input("");

        assert_eq!(app.outcome(), Some(Outcome::EndOfInput));
        assert!(output.contains("Input closed"));
    }

    #[test]
    fn test_run_consumes_one_command_per_iteration_from_one_line() {
        let (app, _output) = run_with_input("  d   d  \n");

        assert_eq!(app.outcome(), Some(Outcome::Won));
        assert_eq!(app.maze().player(), (3, 1));
    }

    #[test]
    fn test_run_stops_at_win_with_commands_left_over() {
        let (app, _output) = run_with_input("ddss\n");

        // The win ends the loop before the trailing moves are consumed.
        assert_eq!(app.outcome(), Some(Outcome::Won));
        assert_eq!(app.maze().player(), (3, 1));
    }
}
