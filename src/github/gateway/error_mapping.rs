//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::error::LabelerError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Maps an Octocrab failure, embedding the HTTP status when GitHub answered.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> LabelerError {
    if let octocrab::Error::GitHub { source, .. } = error {
        let message = format!(
            "could not {operation}: HTTP STATUS {status} {message}",
            status = source.status_code.as_u16(),
            message = source.message
        );
        return if is_auth_failure(source.status_code) {
            LabelerError::Authentication { message }
        } else {
            LabelerError::Api { message }
        };
    }

    if is_network_error(error) {
        return LabelerError::Network {
            message: format!("could not {operation}: {error}"),
        };
    }

    LabelerError::Api {
        message: format!("could not {operation}: {error}"),
    }
}
