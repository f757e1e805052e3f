use std::fmt::Display;

/// Label added to the issue once the access request has gone out.
pub const EMAIL_SENT_LABEL: &str = "email-sent";

/// Outcome reported back on the issue that carried the command.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Notice {
    Sent,
    Failed { reason: String },
}

impl Notice {
    pub fn failed(reason: impl Display) -> Self {
        Self::Failed {
            reason: format!("{reason:#}"),
        }
    }

    pub fn comment(&self) -> String {
        match self {
            Notice::Sent => "Successfully sent approval email".to_string(),
            Notice::Failed { reason } => format!("Failed to send email: {reason}"),
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            Notice::Sent => vec![EMAIL_SENT_LABEL],
            Notice::Failed { .. } => Vec::new(),
        }
    }
}
