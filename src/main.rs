#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use invitation_core::{
    CardConfig, EventDetails, ResponseMode, SharedSubmitter, SubmissionConfig, WebhookClient,
    DEFAULT_ACKNOWLEDGMENT_SECS, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};
use tracing_subscriber::EnvFilter;

/// Invitation Card - event invitation with RSVP
#[derive(Parser, Debug)]
#[command(name = "invitation-card")]
#[command(about = "Event invitation card that forwards RSVPs to a spreadsheet webhook")]
struct Args {
    /// JSON file with image, title, description, date, time and location
    #[arg(short, long)]
    event: Option<PathBuf>,

    /// Webhook URL that receives RSVPs
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Seconds the thank-you screen stays up
    #[arg(long, default_value_t = DEFAULT_ACKNOWLEDGMENT_SECS)]
    thank_you_secs: u64,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Treat non-2xx webhook responses as failures
    #[arg(long)]
    inspect_status: bool,
}

/// Turn command line arguments into a card configuration
fn build_config(args: &Args) -> anyhow::Result<CardConfig> {
    let event = match &args.event {
        Some(path) => EventDetails::from_json_file(path)
            .with_context(|| format!("loading event file {}", path.display()))?,
        None => EventDetails::default(),
    };

    let response_mode = if args.inspect_status {
        ResponseMode::Inspect
    } else {
        ResponseMode::Opaque
    };
    let submission = SubmissionConfig::new(&args.endpoint)?
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_response_mode(response_mode);

    Ok(CardConfig::new(event, submission)
        .with_acknowledgment(Duration::from_secs(args.thank_you_secs)))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let submitter: SharedSubmitter = Arc::new(WebhookClient::new(config.submission.clone())?);

    tracing::info!(
        "Showing '{}', RSVPs go to {}",
        config.event.title,
        config.submission.endpoint
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&config.event.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(760.0, 640.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .with_context(submitter)
        .launch(app::App);

    Ok(())
}
