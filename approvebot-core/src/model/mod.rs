use indexmap::IndexMap;

pub use approval::{ApprovalRequest, Flag};
pub use email::{Email, Mailbox};
pub use event::Event;
pub use template::{Template, TemplatePart};

pub mod approval;
pub mod email;
pub mod event;
pub mod template;

/// Values substituted into a [`Template`] when it is rendered.
#[derive(Default, Debug)]
pub struct TemplateValues {
    pub values: IndexMap<String, String>,
}

impl TemplateValues {
    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&String> {
        self.values.get(name)
    }
}
