//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.review-labeler.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `REVIEW_LABELER_*`
//! 4. **Command-line arguments** – `--one-approval-label-name`, `--token`, …
//!
//! Values still missing after merging fall back to the variables a GitHub
//! Actions runner provides: `INPUT_<NAME>` for the label names,
//! `GITHUB_TOKEN`, `GITHUB_EVENT_NAME`, `GITHUB_EVENT_PATH`, and
//! `GITHUB_API_URL`.
//!
//! # Configuration File
//!
//! ```toml
//! one_approval_label_name = "approved: 1"
//! two_approvals_label_name = "approved: 2"
//! changes_requested_label_name = "changes requested"
//! updated_pr_label_name = "updated"
//! ```

use std::env;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::LabelerError;
use crate::github::locator::DEFAULT_API_BASE;
use crate::review::labels::inputs;
use crate::review::{EventContext, LabelConfiguration};

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use review_labeler::LabelerConfig;
///
/// let config = LabelerConfig::load().expect("failed to load configuration");
/// let labels = config.label_configuration().expect("label names required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEW_LABELER",
    discovery(
        dotfile_name = ".review-labeler.toml",
        config_file_name = "review-labeler.toml",
        app_name = "review-labeler"
    )
)]
pub struct LabelerConfig {
    /// Label applied when exactly one reviewer approves.
    ///
    /// Falls back to the `one-approval-label-name` action input.
    #[ortho_config()]
    pub one_approval_label_name: Option<String>,

    /// Label applied when two or more reviewers approve.
    ///
    /// Falls back to the `two-approvals-label-name` action input. The short
    /// flag is `-w`; `-t` belongs to `--token`.
    #[ortho_config(cli_short = 'w')]
    pub two_approvals_label_name: Option<String>,

    /// Label applied while any reviewer requests changes.
    ///
    /// Falls back to the `changes-requested-label-name` action input.
    #[ortho_config()]
    pub changes_requested_label_name: Option<String>,

    /// Label applied when commits are pushed after a review.
    ///
    /// Falls back to the `updated-pr-label-name` action input.
    #[ortho_config()]
    pub updated_pr_label_name: Option<String>,

    /// Token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REVIEW_LABELER_TOKEN` or `GITHUB_TOKEN`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Name of the triggering event; falls back to `GITHUB_EVENT_NAME`.
    #[ortho_config(cli_short = 'e')]
    pub event_name: Option<String>,

    /// Path of the JSON event payload; falls back to `GITHUB_EVENT_PATH`.
    #[ortho_config(cli_short = 'p')]
    pub event_path: Option<String>,

    /// REST API root; falls back to `GITHUB_API_URL`, then
    /// `https://api.github.com`.
    #[ortho_config()]
    pub api_url: Option<String>,

    /// Computes and logs the label set without writing it.
    ///
    /// Can be provided via:
    /// - CLI: `--dry-run` / `-n`
    /// - Config file: `dry_run = true`
    #[ortho_config(cli_short = 'n')]
    pub dry_run: bool,
}

impl LabelerConfig {
    /// Builds the validated label names from configuration or action inputs.
    ///
    /// # Errors
    ///
    /// Returns [`LabelerError::MissingLabelName`] when a name is absent or
    /// blank and [`LabelerError::DuplicateLabelName`] when two statuses
    /// share a name.
    pub fn label_configuration(&self) -> Result<LabelConfiguration, LabelerError> {
        let one = label_or_input(self.one_approval_label_name.as_deref(), inputs::ONE_APPROVAL);
        let two = label_or_input(self.two_approvals_label_name.as_deref(), inputs::TWO_APPROVALS);
        let changes = label_or_input(
            self.changes_requested_label_name.as_deref(),
            inputs::CHANGES_REQUESTED,
        );
        let updated = label_or_input(self.updated_pr_label_name.as_deref(), inputs::UPDATED_PR);

        LabelConfiguration::new(&one, &two, &changes, &updated)
    }

    /// Resolves the token from configuration or `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelerError::MissingToken`] when no source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, LabelerError> {
        self.token
            .clone()
            .or_else(|| non_blank_env("GITHUB_TOKEN"))
            .ok_or(LabelerError::MissingToken)
    }

    /// Resolves the triggering event name.
    ///
    /// # Errors
    ///
    /// Returns [`LabelerError::Configuration`] when neither the
    /// configuration nor `GITHUB_EVENT_NAME` names an event.
    pub fn resolve_event_name(&self) -> Result<String, LabelerError> {
        self.event_name
            .clone()
            .or_else(|| non_blank_env("GITHUB_EVENT_NAME"))
            .ok_or_else(|| LabelerError::Configuration {
                message: "event name is required (use --event-name or GITHUB_EVENT_NAME)"
                    .to_owned(),
            })
    }

    /// Resolves the path of the event payload file.
    ///
    /// # Errors
    ///
    /// Returns [`LabelerError::Configuration`] when neither the
    /// configuration nor `GITHUB_EVENT_PATH` provides a path.
    pub fn resolve_event_path(&self) -> Result<Utf8PathBuf, LabelerError> {
        self.event_path
            .clone()
            .or_else(|| non_blank_env("GITHUB_EVENT_PATH"))
            .map(Utf8PathBuf::from)
            .ok_or_else(|| LabelerError::Configuration {
                message: "event payload path is required (use --event-path or GITHUB_EVENT_PATH)"
                    .to_owned(),
            })
    }

    /// Resolves the REST API root.
    #[must_use]
    pub fn resolve_api_url(&self) -> String {
        self.api_url
            .clone()
            .or_else(|| non_blank_env("GITHUB_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned())
    }

    /// Validates the event name against `action` before any network I/O.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`LabelerConfig::resolve_event_name`] and
    /// [`EventContext::parse`].
    pub fn event_context(&self, action: &str) -> Result<EventContext, LabelerError> {
        let event_name = self.resolve_event_name()?;
        EventContext::parse(&event_name, action)
    }
}

/// Reads an action input the way the runner exports it, accepting both the
/// hyphenated and the underscored variable name.
fn action_input(input: &str) -> Option<String> {
    let upper = input.to_uppercase();
    non_blank_env(&format!("INPUT_{upper}"))
        .or_else(|| non_blank_env(&format!("INPUT_{}", upper.replace('-', "_"))))
}

fn label_or_input(configured: Option<&str>, input: &str) -> String {
    configured
        .map(ToOwned::to_owned)
        .or_else(|| action_input(input))
        .unwrap_or_default()
}

fn non_blank_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests;
