use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{Error, Result};

/// A line read from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Input closed (Ctrl-D or end of a pipe).
    Eof,
}

/// Source of player input.
pub trait LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Interactive editor with history, backed by rustyline.
pub struct RustylineEditor {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl RustylineEditor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            history: None,
        })
    }

    /// Like [`RustylineEditor::new`], but history is loaded from and saved to
    /// `path`. A missing file is not an error.
    pub fn with_history(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut editor = DefaultEditor::new()?;
        if path.exists() {
            match editor.load_history(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), "loaded history"),
                Err(err) => tracing::warn!(path = %path.display(), %err, "could not load history"),
            }
        }
        Ok(Self {
            editor,
            history: Some(path),
        })
    }

    /// Write history back to disk, if a history file was configured.
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(path) = &self.history {
            self.editor.save_history(path)?;
            tracing::debug!(path = %path.display(), "saved history");
        }
        Ok(())
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(ReadlineError::Interrupted) => Err(Error::Interrupted),
            Err(err) => Err(err.into()),
        }
    }
}
