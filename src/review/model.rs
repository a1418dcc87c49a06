//! Review records as seen by the reconciliation core.

use chrono::{DateTime, Utc};

/// State of a submitted review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    /// The reviewer approved the pull request.
    Approved,
    /// The reviewer asked for changes.
    ChangesRequested,
    /// Any other state, such as a comment-only or dismissed review.
    Other,
}

impl ReviewState {
    /// Parses the state string returned by the GitHub API.
    ///
    /// Unknown states map to [`ReviewState::Other`].
    #[must_use]
    pub fn from_api(value: &str) -> Self {
        match value {
            "APPROVED" => Self::Approved,
            "CHANGES_REQUESTED" => Self::ChangesRequested,
            _ => Self::Other,
        }
    }

    /// Returns true for approving and change-requesting reviews.
    #[must_use]
    pub const fn is_decisive(self) -> bool {
        matches!(self, Self::Approved | Self::ChangesRequested)
    }
}

/// A single review submitted on a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Review identifier.
    pub id: u64,
    /// Login of the reviewer, if GitHub still knows the account.
    pub author: Option<String>,
    /// Review state.
    pub state: ReviewState,
    /// Submission time. Pending reviews have none.
    pub submitted_at: Option<DateTime<Utc>>,
}
