use std::str::FromStr;

use crate::{
    error::{CommandError, ParseError},
    model::ApprovalRequest,
    service::tokenizer::tokenize,
};

mod approve;

/// Interprets a tokenized command line.
///
/// The first token selects the grammar; `/approve` is the only verb known.
pub fn parse_approval<S: AsRef<str>>(tokens: &[S]) -> Result<ApprovalRequest, ParseError> {
    let Some(verb) = tokens.first() else {
        return Err(ParseError::Empty);
    };

    match verb.as_ref() {
        approve::VERB => approve::parse(tokens),
        other => Err(ParseError::UnsupportedCommand {
            verb: other.to_owned(),
        }),
    }
}

/// Tokenizes and interprets a raw command line.
pub fn parse_command(line: &str) -> Result<ApprovalRequest, CommandError> {
    let tokens = tokenize(line)?;
    Ok(parse_approval(&tokens)?)
}

impl FromStr for ApprovalRequest {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_command(s)
    }
}
