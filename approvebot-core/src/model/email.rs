#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Mailbox {
    pub name: String,
    pub address: String,
}

impl Mailbox {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// The access request sent to the approver.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Email {
    pub from: Mailbox,
    pub to: Mailbox,
    pub cc: Option<Mailbox>,
    pub subject: String,
    pub body: String,
}
