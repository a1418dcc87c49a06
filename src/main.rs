//! Review labeler CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use review_labeler::review::EventName;
use review_labeler::{
    EventPayload, LabelerConfig, LabelerError, OctocrabLabelGateway, PersonalAccessToken,
    ReviewLabelSync, SyncOutcome,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<(), LabelerError> {
    let config = load_config()?;

    // Inputs are fully validated before any request is made.
    let labels = config.label_configuration()?;
    EventName::parse(&config.resolve_event_name()?)?;
    let payload = EventPayload::read(&config.resolve_event_path()?)?;
    let event = config.event_context(&payload.action)?;
    let locator = payload.locator(&config.resolve_api_url())?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    tracing::info!("Input checks completed.");

    let gateway = OctocrabLabelGateway::for_token(&token, &locator)?;
    let sync = ReviewLabelSync::new(&gateway, &labels).dry_run(config.dry_run);
    let outcome = sync.run(&locator, &event).await?;

    write_summary(&outcome)?;
    tracing::info!("Completed.");
    Ok(())
}

fn write_summary(outcome: &SyncOutcome) -> Result<(), LabelerError> {
    let mut stdout = io::stdout().lock();
    let message = match outcome {
        SyncOutcome::Applied(labels) => format!("Applied labels: {labels}"),
        SyncOutcome::DryRun(labels) => format!("Would apply labels: {labels}"),
        SyncOutcome::NoUpdateNecessary => "No label update necessary".to_owned(),
    };

    writeln!(stdout, "{message}").map_err(|error| LabelerError::Io {
        message: error.to_string(),
    })
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`LabelerError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<LabelerConfig, LabelerError> {
    LabelerConfig::load().map_err(|error| LabelerError::Configuration {
        message: error.to_string(),
    })
}
