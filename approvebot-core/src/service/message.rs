use std::fmt;

use anyhow::ensure;
use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use indexmap::IndexMap;
use log::{debug, info};

use crate::{
    config::Settings,
    model::{ApprovalRequest, Email, Event, Mailbox, TemplateValues},
};

/// A command containing this marker does not copy the sender on the request.
const SKIP_CC_MARKER: &str = "skip";

/// Builds the access request email for a parsed command.
///
/// `command` is the raw command line; it is only inspected for the CC opt-out
/// marker.
pub fn compose(
    request: &ApprovalRequest,
    settings: &Settings,
    event: &Event,
    command: &str,
) -> anyhow::Result<Email> {
    debug!(
        "Composing access request for {} to {}",
        request.user_email(),
        request.approver_email()
    );

    for (field, value) in [
        ("approver email", request.approver_email()),
        ("sender address", settings.from.as_str()),
        ("sender name", settings.from_name.as_str()),
        ("recipient name", settings.to_name.as_str()),
        ("subject", settings.subject.as_str()),
    ] {
        ensure!(
            !value.contains(['\r', '\n']),
            "The {field} must fit on a single header line"
        );
    }

    let mut values = TemplateValues::default();
    values.set("user_name", request.user_name());
    values.set("user_email", request.user_email());
    values.set("issue_url", &event.issue.url);
    let body = settings.parsed_template()?.render(&values)?;

    let from = Mailbox::new(&settings.from_name, &settings.from);
    let cc = if command.contains(SKIP_CC_MARKER) {
        info!("Skipping CC to {}", settings.from);
        None
    } else {
        Some(from.clone())
    };

    Ok(Email {
        from,
        to: Mailbox::new(&settings.to_name, request.approver_email()),
        cc,
        subject: settings.subject.clone(),
        body,
    })
}

impl Email {
    pub fn headers(&self) -> IndexMap<&'static str, String> {
        let mut headers = IndexMap::new();
        headers.insert("From", self.from.to_string());
        headers.insert("To", self.to.to_string());
        if let Some(cc) = &self.cc {
            headers.insert("Cc", cc.to_string());
        }
        headers.insert("Subject", encode_header_text(&self.subject));
        headers.insert("MIME-Version", "1.0".to_string());
        headers.insert("Content-Type", r#"text/plain; charset="utf-8""#.to_string());
        headers
    }

    /// Renders the message with CRLF line endings.
    pub fn to_message(&self) -> String {
        let mut message = String::new();
        for (name, value) in self.headers() {
            message.push_str(&format!("{name}: {value}\r\n"));
        }
        message.push_str("\r\n");
        message.push_str(&self.body.replace("\r\n", "\n").replace('\n', "\r\n"));
        message
    }

    /// The rendered message as unpadded URL-safe base64.
    pub fn to_raw(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.to_message())
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            return write!(f, "<{}>", self.address);
        }
        if is_printable_ascii(&self.name) {
            let escaped = self.name.replace('\\', r"\\").replace('"', r#"\""#);
            write!(f, "\"{escaped}\" <{}>", self.address)
        } else {
            write!(f, "{} <{}>", encode_word(&self.name), self.address)
        }
    }
}

fn is_printable_ascii(text: &str) -> bool {
    text.chars()
        .all(|c| c == ' ' || c == '\t' || c.is_ascii_graphic())
}

fn encode_header_text(text: &str) -> String {
    if is_printable_ascii(text) {
        text.to_string()
    } else {
        encode_word(text)
    }
}

/// RFC 2047 encoded word.
fn encode_word(text: &str) -> String {
    format!("=?utf-8?b?{}?=", STANDARD.encode(text))
}
