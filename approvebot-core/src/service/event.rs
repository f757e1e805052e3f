use std::{fs, path::Path, str::FromStr};

use anyhow::Context;
use log::debug;

use crate::model::Event;

impl FromStr for Event {
    type Err = anyhow::Error;

    fn from_str(payload: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(payload).context("Unable to unmarshal event payload")
    }
}

impl Event {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        debug!("Reading event payload from {}", path.display());
        fs::read_to_string(path)
            .with_context(|| format!("Unable to read event payload {}", path.display()))?
            .parse()
    }

    /// `owner/name` of the repository the event belongs to.
    pub fn repository_slug(&self) -> String {
        format!("{}/{}", self.organization.login, self.repository.name)
    }
}
