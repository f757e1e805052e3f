use itertools::Itertools;
use thiserror::Error;

use crate::model::approval::Flag;

/// Failures raised while splitting a command line into tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenizeError {
    /// The line ended while a quote was still open.
    #[error("unclosed quote in command line: {input}")]
    UnclosedQuote {
        /// The full line that was being tokenized.
        input: String,
    },
}

/// Failures raised while interpreting a token sequence as a command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unsupported command: {verb}")]
    UnsupportedCommand { verb: String },

    #[error("not enough arguments in command: expected at least {expected}, found {found}")]
    NotEnoughArguments { expected: usize, found: usize },

    #[error("required flag missing: {}", .missing.iter().join(", "))]
    MissingFlag { missing: Vec<Flag> },

    #[error("command contained empty flag input")]
    EmptyFlagValue,

    /// A flag sits too close to the end of the command to carry its value.
    #[error("malformed command: {flag} is missing its value")]
    Malformed { flag: Flag },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unable to parse command line arguments: {0}")]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
