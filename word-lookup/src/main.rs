use std::process::ExitCode;
use std::sync::Arc;

use audio::ExternalPlayer;
use clap::Parser;
use config::Config;
use controller::{LookupController, LookupState};
use diagnostics::TracingLog;
use dictionary::Dictionary;
use surface::TerminalSurface;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;
use utilities::{Prompt, PromptCommand};

mod audio;
mod config;
mod controller;
mod diagnostics;
mod display;
mod render;
mod surface;
mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let controller = Arc::new(LookupController::new(
        Arc::new(Dictionary::with_base_url(config.endpoint.clone())),
        Arc::new(TerminalSurface::new(config.format.renderer())),
        Arc::new(ExternalPlayer::new(config.player.as_deref())),
        Arc::new(TracingLog),
    ));
    tracing::debug!(endpoint = %config.endpoint, format = ?config.format, "starting");

    if !config.words.is_empty() {
        let mut states = Vec::with_capacity(config.words.len());
        for word in &config.words {
            states.push(controller.perform_lookup(word).await);
        }
        return Ok(exit_code(&states));
    }

    let mut lookups = JoinSet::new();
    let mut prompt = Prompt::stdin();
    while let Some(line) = prompt.input(">> ").await? {
        match PromptCommand::parse(&line) {
            PromptCommand::Quit => break,
            PromptCommand::Play => {
                if !controller.activate_audio_trigger() {
                    println!("There is no pronunciation to play.");
                }
            }
            PromptCommand::Lookup => {
                let controller = Arc::clone(&controller);
                lookups.spawn(async move { controller.perform_lookup(&line).await });
            }
        }
        // finished lookups don't need to be kept around
        while lookups.try_join_next().is_some() {}
    }
    while lookups.join_next().await.is_some() {}
    Ok(ExitCode::SUCCESS)
}

/// One-shot runs fail when any word could not be fetched or read.
fn exit_code(states: &[LookupState]) -> ExitCode {
    if states.contains(&LookupState::NetworkError) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
