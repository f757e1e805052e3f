mod dispatch;

use std::env;

use anyhow::Context;
use approvebot_core::{config::Settings, model::Event, notice::Notice};
use dispatch::Dispatch;
use log::{error, info};

const DEFAULT_CONFIG_PATH: &str = "approvebot.yaml";

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let event_path = env::var("GITHUB_EVENT_PATH").context("GITHUB_EVENT_PATH is not set")?;
    let event = approvebot_core::load_event(&event_path)?;

    let config_path =
        env::var("APPROVEBOT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let settings = approvebot_core::load_settings(&config_path)
        .with_context(|| format!("Unable to load settings from {config_path}"))?;

    let command = env::var("INPUT_COMMAND")
        .ok()
        .filter(|command| !command.trim().is_empty())
        .or_else(|| event.comment_body().map(str::to_owned))
        .context("No command: INPUT_COMMAND is unset and the event has no comment body")?;

    let result = prepare(&command, &settings, &event);
    let output = match &result {
        Ok(dispatch) => serde_json::to_string_pretty(dispatch)?,
        Err(err) => {
            error!("{err:#}");
            let failure = Dispatch::new(
                event.repository_slug(),
                event.issue.number,
                None,
                &Notice::failed(err),
            );
            serde_json::to_string_pretty(&failure)?
        }
    };
    println!("{output}");

    result.map(|_| ())
}

fn prepare(command: &str, settings: &Settings, event: &Event) -> anyhow::Result<Dispatch> {
    settings.validate()?;

    info!("Attempting to parse command: [{command}]");
    let request = approvebot_core::parse_command(command)
        .with_context(|| format!("unable to parse command [{command}]"))?;
    info!(
        "Access requested by {} <{}>, approver {}",
        request.user_name(),
        request.user_email(),
        request.approver_email()
    );

    let email = approvebot_core::compose(&request, settings, event, command)?;
    Ok(Dispatch::new(
        event.repository_slug(),
        event.issue.number,
        Some(&email),
        &Notice::Sent,
    ))
}
