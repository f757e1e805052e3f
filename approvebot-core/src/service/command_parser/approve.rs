use crate::{
    error::ParseError,
    model::{ApprovalRequest, Flag},
};

pub(super) const VERB: &str = "/approve";

/// The verb plus three flags with their values, counting a two-word name.
const MIN_TOKENS: usize = 8;

/// Scans every token for `--pm`, `--name` and `--email`, in any order.
///
/// When a flag appears more than once, the last occurrence wins. An unquoted
/// name is read as one word when `--email` follows it, and as two words
/// otherwise; names of three or more words have to be quoted.
pub(super) fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<ApprovalRequest, ParseError> {
    if tokens.len() < MIN_TOKENS {
        return Err(ParseError::NotEnoughArguments {
            expected: MIN_TOKENS,
            found: tokens.len(),
        });
    }

    let mut approver = None;
    let mut user = None;
    let mut email = None;

    for (index, token) in tokens.iter().enumerate() {
        let Some(flag) = Flag::from_token(token.as_ref()) else {
            continue;
        };
        match flag {
            Flag::Approver => approver = Some(value_after(tokens, index, flag)?),
            Flag::Name => user = Some(name_after(tokens, index)?),
            Flag::Email => email = Some(value_after(tokens, index, flag)?),
        }
    }

    match (approver, user, email) {
        (Some(approver), Some(user), Some(email)) => {
            if approver.is_empty() || user.is_empty() || email.is_empty() {
                return Err(ParseError::EmptyFlagValue);
            }
            Ok(ApprovalRequest::new(approver, user, email))
        }
        (approver, user, email) => {
            let seen = [approver.is_some(), user.is_some(), email.is_some()];
            let missing = Flag::ALL
                .into_iter()
                .zip(seen)
                .filter_map(|(flag, seen)| (!seen).then_some(flag))
                .collect();
            Err(ParseError::MissingFlag { missing })
        }
    }
}

fn value_after<S: AsRef<str>>(tokens: &[S], index: usize, flag: Flag) -> Result<String, ParseError> {
    tokens
        .get(index + 1)
        .map(|value| value.as_ref().to_owned())
        .ok_or(ParseError::Malformed { flag })
}

fn name_after<S: AsRef<str>>(tokens: &[S], index: usize) -> Result<String, ParseError> {
    match (tokens.get(index + 1), tokens.get(index + 2)) {
        (Some(first), Some(next)) if Flag::from_token(next.as_ref()) == Some(Flag::Email) => {
            Ok(first.as_ref().to_owned())
        }
        (Some(first), Some(last)) => Ok(format!("{} {}", first.as_ref(), last.as_ref())),
        _ => Err(ParseError::Malformed { flag: Flag::Name }),
    }
}
