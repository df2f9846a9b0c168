//! The game loop.
//!
//! A [`Game`] owns the queue of levels and moves through [`State`]s until
//! the player quits or clears the last level:
//!
//! ```text
//! AwaitingInput -> Evaluating -> LevelComplete -> AwaitingInput ...
//!       ^              |               |
//!       +--------------+               +-> AllLevelsComplete
//! AwaitingInput -> Exited
//! ```

use std::collections::VecDeque;
use std::io::Write;

use crate::editor::{Input, LineEditor};
use crate::error::{Error, Result};
use crate::level::Level;
use crate::pattern::{self, Pattern};

pub const BANNER: &str = "WELCOME TO REGINA-EX!";
pub const PROMPT: &str = "> ";
pub const INVALID_PATTERN: &str = "Please enter a valid regex";
pub const TRY_AGAIN: &str = "Please try again";
pub const FAREWELL: &str = "Goodbye!";
pub const COMPLETED: &str = "You've completed all the challenges!";

#[derive(Debug)]
pub enum State {
    AwaitingInput,
    Evaluating(Pattern),
    LevelComplete,
    Exited,
    AllLevelsComplete,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Exited | State::AllLevelsComplete)
    }
}

/// What a line of player input asks for.
#[derive(Debug)]
pub enum Command {
    Quit,
    Attempt(Pattern),
    Invalid(Error),
}

impl Command {
    /// `exit` and `quit` (any case, surrounding spaces ignored) end the game;
    /// anything else is compiled verbatim.
    pub fn parse(line: &str) -> Self {
        let word = line.trim().to_lowercase();
        if word == "exit" || word == "quit" {
            return Command::Quit;
        }
        match pattern::compile(line) {
            Ok(pattern) => Command::Attempt(pattern),
            Err(err) => Command::Invalid(err),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Exited { cleared: usize },
    Completed { cleared: usize },
}

pub struct Game {
    remaining: VecDeque<Level>,
    current: Level,
    cleared: usize,
}

impl Game {
    /// Start with the first level. Fails with [`Error::EmptyLevelQueue`] if
    /// there are none.
    pub fn new(levels: impl IntoIterator<Item = Level>) -> Result<Self> {
        let mut remaining: VecDeque<Level> = levels.into_iter().collect();
        let current = remaining.pop_front().ok_or(Error::EmptyLevelQueue)?;
        tracing::debug!(levels = remaining.len() + 1, "game created");
        Ok(Self {
            remaining,
            current,
            cleared: 0,
        })
    }

    pub fn current(&self) -> &Level {
        &self.current
    }

    /// Levels left after the current one.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn cleared(&self) -> usize {
        self.cleared
    }

    /// Advance one transition.
    pub fn step<E: LineEditor, W: Write>(
        &mut self,
        state: State,
        editor: &mut E,
        out: &mut W,
    ) -> Result<State> {
        let next = match state {
            State::AwaitingInput => {
                self.print_level(out)?;
                out.flush()?;
                let line = match editor.read_line(PROMPT)? {
                    Input::Line(line) => line,
                    Input::Eof => {
                        tracing::debug!("input closed");
                        writeln!(out)?;
                        writeln!(out, "{FAREWELL}")?;
                        return Ok(State::Exited);
                    }
                };
                match Command::parse(&line) {
                    Command::Quit => {
                        writeln!(out, "{FAREWELL}")?;
                        State::Exited
                    }
                    Command::Attempt(pattern) => State::Evaluating(pattern),
                    Command::Invalid(err) => {
                        tracing::debug!(input = %line, %err, "rejected pattern");
                        writeln!(out)?;
                        writeln!(out, "{INVALID_PATTERN}")?;
                        writeln!(out)?;
                        State::AwaitingInput
                    }
                }
            }
            State::Evaluating(pattern) => {
                let result = self.current.attempt(&pattern);
                tracing::debug!(
                    pattern = pattern.as_str(),
                    passed = result.passed_count(),
                    total = result.outcomes().len(),
                    "level attempted"
                );
                writeln!(out)?;
                writeln!(out, "{}", result.display_text())?;
                writeln!(out)?;
                if result.is_successful() {
                    State::LevelComplete
                } else {
                    writeln!(out, "{TRY_AGAIN}")?;
                    writeln!(out)?;
                    State::AwaitingInput
                }
            }
            State::LevelComplete => {
                self.cleared += 1;
                match self.remaining.pop_front() {
                    Some(level) => {
                        tracing::debug!(introduction = level.introduction(), "next level");
                        self.current = level;
                        State::AwaitingInput
                    }
                    None => {
                        writeln!(out, "{COMPLETED}")?;
                        State::AllLevelsComplete
                    }
                }
            }
            terminal @ (State::Exited | State::AllLevelsComplete) => terminal,
        };
        Ok(next)
    }

    /// Play until the player quits or every level is cleared.
    pub fn run<E: LineEditor, W: Write>(mut self, editor: &mut E, out: &mut W) -> Result<Ending> {
        writeln!(out)?;
        writeln!(out, "{BANNER}")?;
        writeln!(out)?;

        let mut state = State::AwaitingInput;
        while !state.is_terminal() {
            state = self.step(state, editor, out)?;
        }
        out.flush()?;

        let ending = match state {
            State::AllLevelsComplete => Ending::Completed {
                cleared: self.cleared,
            },
            _ => Ending::Exited {
                cleared: self.cleared,
            },
        };
        tracing::debug!(?ending, "game over");
        Ok(ending)
    }

    fn print_level<W: Write>(&self, out: &mut W) -> Result<()> {
        let introduction = self.current.introduction();
        writeln!(out, "{introduction}")?;
        writeln!(out, "{}", "-".repeat(introduction.chars().count()))?;
        writeln!(out)?;
        for (i, description) in self.current.test_descriptions().iter().enumerate() {
            writeln!(out, "{}. {description}", i + 1)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Print a level set without playing it.
pub fn list_levels<W: Write>(levels: &[Level], out: &mut W) -> Result<()> {
    for (n, level) in levels.iter().enumerate() {
        writeln!(out, "Level {}: {}", n + 1, level.introduction())?;
        for test in level.tests() {
            let expectation = if test.expected_to_match() {
                "match"
            } else {
                "no match"
            };
            writeln!(out, "  {} ({expectation})", test.description())?;
        }
    }
    Ok(())
}
