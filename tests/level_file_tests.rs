use std::fs;

use regina_ex::{load_levels, Error, ExitCode, Game};

const TWO_LEVELS: &str = r#"
[[level]]
introduction = "Match the vowels."

[[level.test]]
text = "a"
matches = true

[[level.test]]
text = "b"
matches = false

[[level]]
introduction = "Match nothing but blanks."

[[level.test]]
text = "  "
matches = true
"#;

#[test]
fn loads_levels_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("levels.toml");
    fs::write(&path, TWO_LEVELS).unwrap();

    let levels = load_levels(Some(path.as_path())).unwrap();
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].introduction(), "Match the vowels.");
    assert_eq!(levels[1].test_descriptions(), vec!["\"  \""]);
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_levels(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(ExitCode::from(&err), ExitCode::ConfigError);
}

#[test]
fn malformed_file_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[level]\n").unwrap();

    let err = load_levels(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, Error::LevelFile { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn file_without_levels_cannot_start_a_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    let levels = load_levels(Some(path.as_path())).unwrap();
    assert!(matches!(Game::new(levels), Err(Error::EmptyLevelQueue)));
}

#[test]
fn listing_shows_expectations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("levels.toml");
    fs::write(&path, TWO_LEVELS).unwrap();
    let levels = load_levels(Some(path.as_path())).unwrap();

    let mut out = Vec::new();
    regina_ex::game::list_levels(&levels, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Level 1: Match the vowels.\n  a (match)\n  b (no match)\n\
         Level 2: Match nothing but blanks.\n  \"  \" (match)\n"
    );
}
