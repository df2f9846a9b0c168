use std::path::PathBuf;

use clap::Parser;

/// A game of regular expressions: write one pattern that matches every
/// string it should and none that it shouldn't.
#[derive(Debug, Parser)]
#[command(name = "regina-ex", version)]
pub struct Cli {
    /// Load levels from a TOML file instead of the built-in set
    #[arg(long, value_name = "PATH")]
    pub levels: Option<PathBuf>,

    /// Keep input history in this file
    #[arg(long, value_name = "PATH", env = "REGINA_HISTORY")]
    pub history: Option<PathBuf>,

    /// Do not read or write a history file
    #[arg(long)]
    pub no_history: bool,

    /// Print the levels and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// History file to use, if persistence is enabled.
    pub fn history_path(&self) -> Option<&PathBuf> {
        if self.no_history {
            None
        } else {
            self.history.as_ref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_builtin_levels() {
        let cli = Cli::try_parse_from(["regina-ex"]).unwrap();
        assert!(cli.levels.is_none());
        assert!(!cli.list);
    }

    #[test]
    fn no_history_overrides_history() {
        let cli = Cli::try_parse_from(["regina-ex", "--history", "h.txt", "--no-history"]).unwrap();
        assert!(cli.history_path().is_none());

        let cli = Cli::try_parse_from(["regina-ex", "--history", "h.txt"]).unwrap();
        assert_eq!(cli.history_path(), Some(&PathBuf::from("h.txt")));
    }
}
