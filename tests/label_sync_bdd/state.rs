//! Scenario state for label synchronisation BDD tests.

use review_labeler::{LabelerError, SyncOutcome};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;
use wiremock::MockServer;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a label synchronisation scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct SyncState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    /// Labels the mock API reports as currently applied.
    pub(crate) current_labels: Slot<Vec<String>>,
    /// Review objects the mock API returns, in submission order.
    pub(crate) reviews: Slot<Vec<Value>>,
    /// Status the review listing answers with instead of the reviews.
    pub(crate) reviews_failure: Slot<u16>,
    pub(crate) outcome: Slot<SyncOutcome>,
    pub(crate) error: Slot<LabelerError>,
}

/// Splits a quoted, comma-separated step argument into label names.
pub(crate) fn parse_label_list(raw: &str) -> Vec<String> {
    raw.trim_matches('"')
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
