//! Deserialisation targets for GitHub review and label responses.
//!
//! Types prefixed with `Api` mirror the REST payloads and convert into the
//! domain types used by the reconciliation core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::review::{LabelSet, Review, ReviewState};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

/// API response type for a pull request review.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReview {
    pub(crate) id: u64,
    pub(crate) user: Option<ApiUser>,
    pub(crate) state: String,
    pub(crate) submitted_at: Option<DateTime<Utc>>,
}

/// API response type for a label attached to an issue or pull request.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    pub(crate) name: String,
}

/// Request body replacing every label on an issue.
#[derive(Debug, Serialize)]
pub(crate) struct SetLabelsRequest<'labels> {
    pub(crate) labels: &'labels LabelSet,
}

impl From<ApiReview> for Review {
    fn from(value: ApiReview) -> Self {
        Self {
            id: value.id,
            author: value.user.and_then(|user| user.login),
            state: ReviewState::from_api(&value.state),
            submitted_at: value.submitted_at,
        }
    }
}

pub(crate) fn label_set(labels: Vec<ApiLabel>) -> LabelSet {
    labels.into_iter().map(|label| label.name).collect()
}
