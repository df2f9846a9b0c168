pub mod cli;
pub mod editor;
pub mod error;
pub mod fixtures;
pub mod game;
pub mod level;
pub mod pattern;

pub use error::{Error, ExitCode, Result};
pub use game::{Ending, Game};
pub use level::{Level, LevelResult, Outcome, Test};

use std::path::Path;

/// Load the level set: from `path` if given, otherwise the built-in one.
pub fn load_levels(path: Option<&Path>) -> Result<Vec<Level>> {
    match path {
        Some(path) => fixtures::load(path),
        None => fixtures::builtin(),
    }
}
