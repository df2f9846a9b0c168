use crate::error::{Error, Result};
use crate::pattern::{self, Pattern};

/// One string a level asks the player to match, or to avoid matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Test {
    text: String,
    expected_to_match: bool,
}

impl Test {
    pub fn new(text: impl Into<String>, expected_to_match: bool) -> Self {
        Self {
            text: text.into(),
            expected_to_match,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn expected_to_match(&self) -> bool {
        self.expected_to_match
    }

    /// Check the pattern against this test's text.
    ///
    /// Any match counts; the pattern does not have to cover the whole string.
    pub fn evaluate(&self, pattern: &Pattern) -> Outcome {
        let matched = pattern::is_match(pattern, &self.text);
        let text = self.text.clone();
        if matched == self.expected_to_match {
            Outcome::Success { text, matched }
        } else {
            Outcome::Failure { text, matched }
        }
    }

    /// The text as listed to the player. Blank strings are quoted so they
    /// show up at all.
    pub fn description(&self) -> String {
        if self.text.trim().is_empty() {
            format!("\"{}\"", self.text)
        } else {
            self.text.clone()
        }
    }
}

/// Result of evaluating one test. `matched` is what the pattern did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { text: String, matched: bool },
    Failure { text: String, matched: bool },
}

impl Outcome {
    pub fn passed(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn display_text(&self) -> String {
        match self {
            Outcome::Success {
                text,
                matched: true,
            } => format!("Matched {text}, as required."),
            Outcome::Success {
                text,
                matched: false,
            } => format!("Did not match {text}, as required."),
            Outcome::Failure {
                text,
                matched: false,
            } => format!("Did not match {text}, but were meant to."),
            Outcome::Failure {
                text,
                matched: true,
            } => format!("Matched {text}, but were not meant to."),
        }
    }
}

/// An introduction and the tests one pattern has to satisfy together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    introduction: String,
    tests: Vec<Test>,
}

impl Level {
    /// Build a level. Fails with [`Error::EmptyLevel`] if `tests` is empty.
    pub fn new(introduction: impl Into<String>, tests: Vec<Test>) -> Result<Self> {
        let introduction = introduction.into();
        if tests.is_empty() {
            return Err(Error::EmptyLevel { introduction });
        }
        Ok(Self {
            introduction,
            tests,
        })
    }

    pub fn introduction(&self) -> &str {
        &self.introduction
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn test_descriptions(&self) -> Vec<String> {
        self.tests.iter().map(Test::description).collect()
    }

    /// Evaluate every test, in order.
    pub fn attempt(&self, pattern: &Pattern) -> LevelResult {
        LevelResult {
            outcomes: self.tests.iter().map(|t| t.evaluate(pattern)).collect(),
        }
    }
}

/// Outcomes of one attempt at a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelResult {
    outcomes: Vec<Outcome>,
}

impl LevelResult {
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// A level is cleared only when every test passes.
    pub fn is_successful(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn display_text(&self) -> String {
        self.outcomes
            .iter()
            .map(Outcome::display_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
