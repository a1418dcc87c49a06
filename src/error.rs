//! Error types shared by configuration, reconciliation, and the GitHub layer.

use thiserror::Error;

/// Errors surfaced while validating inputs or communicating with GitHub.
///
/// Variants split into two classes: configuration errors, raised before any
/// network I/O, and runtime errors raised by the repository host. Use
/// [`LabelerError::is_configuration`] to tell them apart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelerError {
    /// A required label name input was missing or blank.
    #[error(
        "`{input}` is required: specify `one-approval-label-name`, \
         `two-approvals-label-name`, `changes-requested-label-name`, and \
         `updated-pr-label-name`"
    )]
    MissingLabelName {
        /// Name of the input that was not supplied.
        input: String,
    },

    /// Two review-status inputs name the same label.
    #[error("label `{label}` is configured for more than one review status")]
    DuplicateLabelName {
        /// The label name that appears more than once.
        label: String,
    },

    /// The run was triggered by an event this tool does not handle.
    #[error(
        "unsupported event `{event}`: trigger on `pull_request_review`, \
         `pull_request`, or `pull_request_target`"
    )]
    UnsupportedEvent {
        /// Event name reported by the runner.
        event: String,
    },

    /// The event is supported but its activity type is not.
    #[error("`{event}` events only support the `{expected}` action, got `{action}`")]
    UnsupportedAction {
        /// Event name reported by the runner.
        event: String,
        /// Action carried by the event payload.
        action: String,
        /// The only action accepted for this event.
        expected: String,
    },

    /// The event payload lacks a field needed to address the pull request.
    #[error("event payload is missing `{field}`")]
    MissingPayloadField {
        /// Dotted path of the missing field.
        field: String,
    },

    /// The authentication token was missing.
    #[error("GitHub token is required")]
    MissingToken,

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The pull request number is not a valid integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-success response.
    #[error("GitHub API error: {message}")]
    Api {
        /// Operation, HTTP status, and response message.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl LabelerError {
    /// Returns true for errors caused by invalid inputs rather than by the
    /// repository host.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingLabelName { .. }
                | Self::DuplicateLabelName { .. }
                | Self::UnsupportedEvent { .. }
                | Self::UnsupportedAction { .. }
                | Self::MissingPayloadField { .. }
                | Self::MissingToken
                | Self::InvalidUrl(_)
                | Self::InvalidPullRequestNumber
                | Self::Configuration { .. }
        )
    }
}
