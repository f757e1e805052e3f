pub mod config;
pub mod error;
pub mod model;
pub mod notice;
mod service;

use std::path::Path;

use config::Settings;
use model::Event;

pub use service::{
    command_parser::{parse_approval, parse_command},
    message::compose,
    tokenizer::{Tokenizer, tokenize},
};

/// Loads settings from `path` when it exists, then applies `INPUT_*` overrides.
pub fn load_settings<P: AsRef<Path>>(path: P) -> anyhow::Result<Settings> {
    let mut settings = Settings::load_or_default(path)?;
    settings.apply_env(|key| std::env::var(key).ok());
    Ok(settings)
}

pub fn load_event<P: AsRef<Path>>(path: P) -> anyhow::Result<Event> {
    Event::load(path)
}
