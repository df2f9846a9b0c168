use std::path::PathBuf;

/// Errors raised while loading levels or running a session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Player input is not a valid regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The game was started without any levels.
    #[error("no levels to play")]
    EmptyLevelQueue,

    /// A level was built with no tests.
    #[error("level {introduction:?} has no tests")]
    EmptyLevel { introduction: String },

    /// Reading a level file failed.
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A level file is not valid TOML or has the wrong shape.
    #[error("level file {}: {source}", .path.display())]
    LevelFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Writing to the terminal failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("line editor: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),

    /// Ctrl-C at the prompt.
    #[error("interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Player quit or cleared every level
    Success = 0,
    /// Level set could not be loaded or is empty
    ConfigError = 2,
    /// Terminal or editor failure
    InternalError = 3,
    Interrupted = 130,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::EmptyLevelQueue
            | Error::EmptyLevel { .. }
            | Error::Io { .. }
            | Error::LevelFile { .. } => ExitCode::ConfigError,
            Error::InvalidPattern(_) | Error::Output(_) | Error::Editor(_) => {
                ExitCode::InternalError
            }
            Error::Interrupted => ExitCode::Interrupted,
        }
    }
}
