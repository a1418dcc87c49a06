//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::error::LabelerError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given token and API base URL.
///
/// Retries are disabled: a failed request fails the run, and re-running is
/// left to whatever triggered it.
///
/// # Errors
///
/// Returns `LabelerError::InvalidUrl` when the base URI cannot be parsed or
/// `LabelerError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, LabelerError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| LabelerError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .add_retry_config(RetryConfig::None)
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| LabelerError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
