//! Review-state label synchronisation for GitHub pull requests.
//!
//! The library reads a pull request's reviews and labels through Octocrab,
//! reduces the reviews to the status labels they imply (one approval, two
//! approvals, changes requested, updated since review), merges those with
//! the labels already present, and writes the result back.

pub mod config;
pub mod error;
pub mod github;
pub mod review;
pub mod sync;

pub use config::LabelerConfig;
pub use error::LabelerError;
pub use github::{
    EventPayload, OctocrabLabelGateway, PersonalAccessToken, PullRequestLocator,
    ReviewLabelGateway,
};
pub use review::{EventContext, LabelConfiguration, LabelSet, Reconciliation};
pub use sync::{ReviewLabelSync, SyncOutcome};
