use approvebot_core::{model::Email, notice::Notice};
use serde::Serialize;

/// What the sending step needs: the message to deliver and the issue notice.
#[derive(Serialize, Debug)]
pub struct Dispatch {
    pub repository: String,
    pub issue: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Outgoing>,
    pub comment: String,
    pub labels: Vec<&'static str>,
}

#[derive(Serialize, Debug)]
pub struct Outgoing {
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    pub subject: String,
    pub message: String,
    pub raw: String,
}

impl Dispatch {
    pub fn new(repository: String, issue: u64, email: Option<&Email>, notice: &Notice) -> Self {
        Self {
            repository,
            issue,
            email: email.map(|email| Outgoing {
                to: email.to.to_string(),
                cc: email.cc.as_ref().map(ToString::to_string),
                subject: email.subject.clone(),
                message: email.to_message(),
                raw: email.to_raw(),
            }),
            comment: notice.comment(),
            labels: notice.labels(),
        }
    }
}
