//! Webhook payload of the event that triggered the run.
//!
//! Only the fields needed to address the pull request are read: the action,
//! the repository owner and name, and the pull request number.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;

use super::locator::PullRequestLocator;
use crate::error::LabelerError;

#[derive(Debug, Deserialize)]
struct RawPayload {
    action: Option<String>,
    repository: Option<RawRepository>,
    pull_request: Option<RawPullRequest>,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    name: Option<String>,
    owner: Option<RawOwner>,
}

#[derive(Debug, Deserialize)]
struct RawOwner {
    login: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    number: Option<u64>,
}

/// The parts of an event payload the label sync relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
    /// Activity type, e.g. `synchronize` or `submitted`.
    pub action: String,
    /// Login of the repository owner.
    pub owner: String,
    /// Repository name.
    pub repository: String,
    /// Pull request number.
    pub pull_request_number: u64,
}

impl EventPayload {
    /// Parses a payload from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`LabelerError::Configuration`] when the text is not valid
    /// JSON and [`LabelerError::MissingPayloadField`] naming the first
    /// required field that is absent.
    pub fn from_json(json: &str) -> Result<Self, LabelerError> {
        let raw: RawPayload =
            serde_json::from_str(json).map_err(|error| LabelerError::Configuration {
                message: format!("event payload is not valid JSON: {error}"),
            })?;

        let action = raw.action.ok_or_else(|| missing("action"))?;
        let repository = raw.repository.ok_or_else(|| missing("repository"))?;
        let owner = repository
            .owner
            .and_then(|owner| owner.login)
            .ok_or_else(|| missing("repository.owner.login"))?;
        let name = repository.name.ok_or_else(|| missing("repository.name"))?;
        let pull_request_number = raw
            .pull_request
            .and_then(|pull_request| pull_request.number)
            .ok_or_else(|| missing("pull_request.number"))?;

        Ok(Self {
            action,
            owner,
            repository: name,
            pull_request_number,
        })
    }

    /// Reads and parses the payload file written by the runner.
    ///
    /// # Errors
    ///
    /// Returns [`LabelerError::Io`] when the file cannot be read, otherwise
    /// the errors of [`EventPayload::from_json`].
    pub fn read(path: &Utf8Path) -> Result<Self, LabelerError> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_str().is_empty() => dir.to_path_buf(),
            _ => Utf8PathBuf::from("."),
        };
        let file_name = path.file_name().ok_or_else(|| LabelerError::Io {
            message: format!("invalid event path '{path}': no file name"),
        })?;

        let dir = Dir::open_ambient_dir(&parent, ambient_authority()).map_err(|error| {
            LabelerError::Io {
                message: format!("failed to open event directory '{parent}': {error}"),
            }
        })?;
        let content = dir
            .read_to_string(file_name)
            .map_err(|error| LabelerError::Io {
                message: format!("failed to read event payload '{path}': {error}"),
            })?;

        Self::from_json(&content)
    }

    /// Addresses the pull request named by the payload on `api_base`.
    ///
    /// # Errors
    ///
    /// Propagates validation failures from [`PullRequestLocator::new`].
    pub fn locator(&self, api_base: &str) -> Result<PullRequestLocator, LabelerError> {
        PullRequestLocator::new(
            api_base,
            &self.owner,
            &self.repository,
            self.pull_request_number,
        )
    }
}

fn missing(field: &str) -> LabelerError {
    LabelerError::MissingPayloadField {
        field: field.to_owned(),
    }
}
