use std::fmt;

/// A flag understood by the `/approve` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// `--pm`: the approver's email address.
    Approver,
    /// `--name`: the requester's display name.
    Name,
    /// `--email`: the requester's email address.
    Email,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::Approver, Flag::Name, Flag::Email];

    /// Recognize a token as a flag, in either its double-dash or single-dash spelling.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "--pm" | "-pm" => Some(Flag::Approver),
            "--name" | "-name" => Some(Flag::Name),
            "--email" | "-email" => Some(Flag::Email),
            _ => None,
        }
    }

    pub const fn spelling(self) -> &'static str {
        match self {
            Flag::Approver => "--pm",
            Flag::Name => "--name",
            Flag::Email => "--email",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// A fully parsed `/approve` command.
///
/// Only the command parser builds one, and only once every field holds a
/// non-empty value.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ApprovalRequest {
    approver_email: String,
    user_name: String,
    user_email: String,
}

impl ApprovalRequest {
    pub(crate) fn new(approver_email: String, user_name: String, user_email: String) -> Self {
        Self {
            approver_email,
            user_name,
            user_email,
        }
    }

    pub fn approver_email(&self) -> &str {
        &self.approver_email
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }
}
