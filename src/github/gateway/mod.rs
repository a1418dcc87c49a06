//! Gateways for reading reviews and writing labels through Octocrab.
//!
//! The trait is the seam between the reconciliation core and the network:
//! tests mock it while the Octocrab implementation handles real HTTP
//! requests.

mod client;
mod error_mapping;
mod review_labels;

pub use review_labels::OctocrabLabelGateway;

use async_trait::async_trait;

use crate::error::LabelerError;
use crate::github::locator::PullRequestLocator;
use crate::review::{LabelSet, Review};

/// Gateway to the reviews and labels of a pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewLabelGateway: Send + Sync {
    /// Fetch every review submitted on the pull request.
    async fn list_reviews(&self, locator: &PullRequestLocator)
    -> Result<Vec<Review>, LabelerError>;

    /// Fetch the labels currently attached to the pull request.
    async fn list_labels(&self, locator: &PullRequestLocator) -> Result<LabelSet, LabelerError>;

    /// Replace every label on the pull request with `labels`.
    async fn set_labels(
        &self,
        locator: &PullRequestLocator,
        labels: &LabelSet,
    ) -> Result<(), LabelerError>;
}
