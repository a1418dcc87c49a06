//! Test helpers for constructing reviews and GitHub review payloads.
//!
//! # Examples
//!
//! ```
//! use review_labeler::review::ReviewState;
//! use review_labeler::review::test_support::review_at;
//!
//! let review = review_at(1, "alice", ReviewState::Approved, 60);
//! assert_eq!(review.author.as_deref(), Some("alice"));
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use super::labels::LabelConfiguration;
use super::model::{Review, ReviewState};

/// Label names used throughout the test suites.
pub const ONE_APPROVAL: &str = "approved: 1";
/// See [`ONE_APPROVAL`].
pub const TWO_APPROVALS: &str = "approved: 2";
/// See [`ONE_APPROVAL`].
pub const CHANGES_REQUESTED: &str = "changes requested";
/// See [`ONE_APPROVAL`].
pub const UPDATED: &str = "updated";

/// Builds a [`LabelConfiguration`] from the test label names.
///
/// # Panics
///
/// Never in practice; the constant names are valid.
#[must_use]
pub fn label_configuration() -> LabelConfiguration {
    LabelConfiguration::new(ONE_APPROVAL, TWO_APPROVALS, CHANGES_REQUESTED, UPDATED)
        .unwrap_or_else(|error| panic!("test label names should be valid: {error}"))
}

/// Builds a [`Review`] submitted `seconds` after the Unix epoch.
#[must_use]
pub fn review_at(id: u64, author: &str, state: ReviewState, seconds: i64) -> Review {
    Review {
        id,
        author: Some(author.to_owned()),
        state,
        submitted_at: epoch_offset(seconds),
    }
}

/// Builds the JSON object GitHub returns for a review.
///
/// `state` is the raw API string, for example `APPROVED` or `COMMENTED`.
#[must_use]
pub fn api_review_json(id: u64, author: &str, state: &str, seconds: i64) -> Value {
    let submitted_at = epoch_offset(seconds).map(|timestamp| timestamp.to_rfc3339());
    json!({
        "id": id,
        "user": { "login": author },
        "body": "",
        "state": state,
        "submitted_at": submitted_at,
    })
}

/// Builds the JSON array GitHub returns for a pull request's labels.
#[must_use]
pub fn api_labels_json(names: &[&str]) -> Value {
    Value::Array(
        (1_u64..)
            .zip(names)
            .map(|(id, name)| json!({ "id": id, "name": name, "color": "ededed" }))
            .collect(),
    )
}

fn epoch_offset(seconds: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single()
}
