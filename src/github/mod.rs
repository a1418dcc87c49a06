//! GitHub access for the label sync.
//!
//! This module wraps Octocrab to read a pull request's reviews and labels
//! and to replace its labels, and parses the webhook payload of the event
//! that triggered the run. Octocrab errors are mapped into
//! [`LabelerError`](crate::LabelerError) variants that embed the HTTP status.

pub mod event;
pub mod gateway;
pub mod locator;
pub(crate) mod models;

pub use event::EventPayload;
pub use gateway::{OctocrabLabelGateway, ReviewLabelGateway};
pub use locator::{
    DEFAULT_API_BASE, PersonalAccessToken, PullRequestLocator, PullRequestNumber, RepositoryName,
    RepositoryOwner,
};

#[cfg(test)]
pub use gateway::MockReviewLabelGateway;
