//! Level sets: the built-in table and TOML level files.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::level::{Level, Test};

const BUILTIN: &[(&str, &[(&str, bool)])] = &[
    (
        "Match the whole words.",
        &[
            ("Embark!", true),
            ("Let's go!", true),
            ("Proceed!", true),
            ("", false),
        ],
    ),
    (
        "Match the words beginning with a capital letter.",
        &[
            ("One", true),
            ("oNe", false),
            ("Two", true),
            ("tWo", false),
            ("Three", true),
            ("thRee", false),
        ],
    ),
    (
        "Match the lines containing a digit.",
        &[
            ("Agent 007", true),
            ("route 66", true),
            ("no numbers here", false),
            ("   ", false),
        ],
    ),
    (
        "Match the words ending in an exclamation mark.",
        &[
            ("Halt!", true),
            ("Halt!?", false),
            ("Onwards!", true),
            ("Onwards.", false),
        ],
    ),
];

/// The levels shipped with the game.
pub fn builtin() -> Result<Vec<Level>> {
    BUILTIN
        .iter()
        .map(|(introduction, tests)| {
            let tests = tests
                .iter()
                .map(|&(text, expected)| Test::new(text, expected))
                .collect();
            Level::new(*introduction, tests)
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelFile {
    #[serde(default)]
    level: Vec<LevelEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelEntry {
    introduction: String,
    #[serde(default)]
    test: Vec<TestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TestEntry {
    text: String,
    matches: bool,
}

/// Parse a level set from TOML text. `path` is only used in errors.
pub fn parse(content: &str, path: &Path) -> Result<Vec<Level>> {
    let file: LevelFile = toml::from_str(content).map_err(|source| Error::LevelFile {
        path: path.to_path_buf(),
        source,
    })?;

    file.level
        .into_iter()
        .map(|entry| {
            let tests = entry
                .test
                .into_iter()
                .map(|t| Test::new(t.text, t.matches))
                .collect();
            Level::new(entry.introduction, tests)
        })
        .collect()
}

/// Read a level set from a TOML file.
pub fn load(path: &Path) -> Result<Vec<Level>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let levels = parse(&content, path)?;
    tracing::debug!(path = %path.display(), count = levels.len(), "loaded level file");
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_levels_are_valid() {
        let levels = builtin().unwrap();
        assert_eq!(levels.len(), BUILTIN.len());
        assert_eq!(levels[0].introduction(), "Match the whole words.");
        assert!(levels.iter().all(|l| !l.tests().is_empty()));
    }

    #[test]
    fn parses_levels_in_order() {
        let content = r#"
            [[level]]
            introduction = "First"
            [[level.test]]
            text = "a"
            matches = true

            [[level]]
            introduction = "Second"
            [[level.test]]
            text = "b"
            matches = false
            [[level.test]]
            text = ""
            matches = false
        "#;
        let levels = parse(content, Path::new("levels.toml")).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[1].introduction(), "Second");
        assert_eq!(levels[1].tests(), &[Test::new("b", false), Test::new("", false)]);
    }

    #[test]
    fn level_without_tests_is_rejected() {
        let content = "[[level]]\nintroduction = \"Empty\"\n";
        let err = parse(content, Path::new("levels.toml")).unwrap_err();
        assert!(matches!(err, Error::EmptyLevel { introduction } if introduction == "Empty"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let content = "[[level]]\nintro = \"typo\"\n";
        let err = parse(content, Path::new("levels.toml")).unwrap_err();
        assert!(matches!(err, Error::LevelFile { .. }));
    }

    #[test]
    fn empty_file_has_no_levels() {
        assert!(parse("", Path::new("levels.toml")).unwrap().is_empty());
    }
}
