//! Review-state reduction and label reconciliation.
//!
//! Everything in this module is pure: reviews and labels go in, the label
//! set to persist comes out. The data flows through three stages:
//!
//! 1. [`latest_decisive_reviews`] keeps one approving or change-requesting
//!    review per author.
//! 2. [`classify`] maps those reviews to the approval-tier and
//!    changes-requested labels.
//! 3. [`reconcile`] merges the classified labels with the labels already on
//!    the pull request and applies the adjustments for the triggering event.

pub mod aggregator;
pub mod classifier;
pub mod event;
pub mod labels;
pub mod model;
pub mod reconciliation;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use aggregator::latest_decisive_reviews;
pub use classifier::{ReviewTally, classify};
pub use event::{EventAction, EventContext, EventName};
pub use labels::{LabelConfiguration, LabelSet};
pub use model::{Review, ReviewState};
pub use reconciliation::{Reconciliation, reconcile};
