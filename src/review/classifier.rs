//! Mapping of decisive reviews to review-status labels.

use std::collections::BTreeMap;

use super::labels::{LabelConfiguration, LabelSet};
use super::model::{Review, ReviewState};

/// Counts of decisive reviews by state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewTally {
    /// Reviewers whose latest decisive review approves.
    pub approved: usize,
    /// Reviewers whose latest decisive review requests changes.
    pub changes_requested: usize,
}

impl ReviewTally {
    /// Tallies the given reviews.
    pub fn from_reviews<'review>(reviews: impl IntoIterator<Item = &'review Review>) -> Self {
        reviews
            .into_iter()
            .fold(Self::default(), |mut tally, review| {
                match review.state {
                    ReviewState::Approved => tally.approved += 1,
                    ReviewState::ChangesRequested => tally.changes_requested += 1,
                    ReviewState::Other => {}
                }
                tally
            })
    }
}

/// Derives the review-status labels implied by the decisive reviews.
///
/// One approval yields the one-approval label, two or more the
/// two-approvals label; the tiers never appear together. Any outstanding
/// change request adds the changes-requested label alongside the tier. The
/// updated label is never produced here.
#[must_use]
pub fn classify(decisive: &BTreeMap<String, Review>, config: &LabelConfiguration) -> LabelSet {
    let tally = ReviewTally::from_reviews(decisive.values());
    tracing::debug!(
        approved = tally.approved,
        changes_requested = tally.changes_requested,
        "tallied decisive reviews"
    );

    let mut labels = LabelSet::new();
    match tally.approved {
        0 => {}
        1 => {
            labels.insert(config.one_approval());
        }
        _ => {
            labels.insert(config.two_approvals());
        }
    }
    if tally.changes_requested > 0 {
        labels.insert(config.changes_requested());
    }

    labels
}
