use std::{fs, path::Path};

use anyhow::{Context, ensure};
use log::debug;
use serde::Deserialize;

use crate::model::Template;

/// Placeholders an access request body may use.
pub const TEMPLATE_VARIABLES: [&str; 3] = ["user_name", "user_email", "issue_url"];

const DEFAULT_TEMPLATE: &str = "Hello,

{{ user_name }} ({{ user_email }}) has requested access.
Please review the request and reply with your approval: {{ issue_url }}

Thank you.
";

/// Sender identity and message layout for access request emails.
///
/// Read from YAML, then overridden field by field from `INPUT_*` variables.
#[derive(Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    pub from: String,
    pub from_name: String,
    pub to_name: String,
    pub subject: String,
    pub template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            from: String::new(),
            from_name: "GitHub".to_string(),
            to_name: "PM/COR".to_string(),
            subject: "User Access Request".to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        debug!("Loading settings from {}", path.display());
        let settings = serde_norway::from_str::<Settings>(&fs::read_to_string(path)?)?;
        Ok(settings)
    }

    /// Like [`Settings::load`], falling back to defaults when `path` does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No settings file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Overrides fields with non-empty values found through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields = [
            ("INPUT_FROM", &mut self.from),
            ("INPUT_FROM_NAME", &mut self.from_name),
            ("INPUT_TO_NAME", &mut self.to_name),
            ("INPUT_SUBJECT", &mut self.subject),
            ("INPUT_TEMPLATE", &mut self.template),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|value| !value.is_empty()) {
                debug!("Overriding setting from {key}");
                *field = value;
            }
        }
    }

    /// Parses the body template.
    ///
    /// A template without `{{ }}` placeholders but with `%s` verbs is read
    /// positionally, filling user name, user email and issue URL in that order.
    pub fn parsed_template(&self) -> anyhow::Result<Template> {
        let template: Template = self
            .template
            .parse()
            .context("Invalid access request template")?;
        if template.variables().next().is_none() && self.template.contains("%s") {
            return Template::positional(&self.template, &TEMPLATE_VARIABLES)
                .context("Invalid access request template");
        }
        Ok(template)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.from.trim().is_empty(), "Sender address is not set");
        ensure!(!self.subject.trim().is_empty(), "Email subject is not set");

        let template = self.parsed_template()?;
        for variable in template.variables() {
            ensure!(
                TEMPLATE_VARIABLES.contains(&variable),
                "Unknown template placeholder `{variable}`, expected one of {}",
                TEMPLATE_VARIABLES.join(", ")
            );
        }

        Ok(())
    }
}
