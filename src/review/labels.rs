//! Label sets and the configured review-status label names.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::LabelerError;

/// A set of unique label names.
///
/// Iteration order is lexicographic so that logs and write requests are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeSet<String>);

impl LabelSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a label, returning true when it was not already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    /// Removes a label, returning true when it was present.
    pub fn remove(&mut self, label: &str) -> bool {
        self.0.remove(label)
    }

    /// Checks membership.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Returns true when the set holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over label names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Labels present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Splits the set into `(review_labels, non_review_labels)` according to
    /// the configured review-status names.
    #[must_use]
    pub fn partition(&self, config: &LabelConfiguration) -> (Self, Self) {
        let (review, other): (BTreeSet<String>, BTreeSet<String>) = self
            .0
            .iter()
            .cloned()
            .partition(|label| config.is_review_label(label));
        (Self(review), Self(other))
    }

    /// Consumes the set, returning the names in lexicographic order.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        formatter.write_str(&rendered)
    }
}

/// Input names under which the four review-status labels are configured.
pub mod inputs {
    /// Label applied when exactly one reviewer approves.
    pub const ONE_APPROVAL: &str = "one-approval-label-name";
    /// Label applied when two or more reviewers approve.
    pub const TWO_APPROVALS: &str = "two-approvals-label-name";
    /// Label applied while any reviewer requests changes.
    pub const CHANGES_REQUESTED: &str = "changes-requested-label-name";
    /// Label applied when commits land after the last review.
    pub const UPDATED_PR: &str = "updated-pr-label-name";
}

/// The four review-status label names managed by this tool.
///
/// Every name is non-empty and the four are pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConfiguration {
    one_approval: String,
    two_approvals: String,
    changes_requested: String,
    updated: String,
}

impl LabelConfiguration {
    /// Validates and stores the label names.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`LabelerError::MissingLabelName`] when a name is blank and
    /// [`LabelerError::DuplicateLabelName`] when two statuses share a name.
    pub fn new(
        one_approval: &str,
        two_approvals: &str,
        changes_requested: &str,
        updated: &str,
    ) -> Result<Self, LabelerError> {
        let config = Self {
            one_approval: require_label(inputs::ONE_APPROVAL, one_approval)?,
            two_approvals: require_label(inputs::TWO_APPROVALS, two_approvals)?,
            changes_requested: require_label(inputs::CHANGES_REQUESTED, changes_requested)?,
            updated: require_label(inputs::UPDATED_PR, updated)?,
        };

        let mut seen = BTreeSet::new();
        for label in config.review_labels() {
            if !seen.insert(label) {
                return Err(LabelerError::DuplicateLabelName {
                    label: label.to_owned(),
                });
            }
        }

        Ok(config)
    }

    /// Label for a single approval.
    #[must_use]
    pub const fn one_approval(&self) -> &str {
        self.one_approval.as_str()
    }

    /// Label for two or more approvals.
    #[must_use]
    pub const fn two_approvals(&self) -> &str {
        self.two_approvals.as_str()
    }

    /// Label for outstanding change requests.
    #[must_use]
    pub const fn changes_requested(&self) -> &str {
        self.changes_requested.as_str()
    }

    /// Label for a pull request updated since its last review.
    #[must_use]
    pub const fn updated(&self) -> &str {
        self.updated.as_str()
    }

    /// All four managed names.
    #[must_use]
    pub const fn review_labels(&self) -> [&str; 4] {
        [
            self.one_approval(),
            self.two_approvals(),
            self.changes_requested(),
            self.updated(),
        ]
    }

    /// Returns true when `label` is one of the managed names.
    #[must_use]
    pub fn is_review_label(&self, label: &str) -> bool {
        self.review_labels().contains(&label)
    }
}

fn require_label(input: &str, value: &str) -> Result<String, LabelerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LabelerError::MissingLabelName {
            input: input.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}
