//! Merging classified review labels with the labels already on a pull
//! request.
//!
//! Labels outside the four review statuses always pass through untouched.
//! Among the current review labels only the updated marker can survive; the
//! approval tiers and changes-requested label are recomputed every run. The
//! triggering event then adjusts the result:
//!
//! - a push (`synchronize`) adds the updated marker and hides any
//!   changes-requested label, since the new commits presumably address it;
//! - a submitted review retires the updated marker, but only when the
//!   classified labels differ from the review labels already present.

use super::event::EventContext;
use super::labels::{LabelConfiguration, LabelSet};

/// Result of reconciling labels for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Replace the pull request's labels with this set.
    Apply(LabelSet),
    /// The reconciled set is empty; nothing is written.
    NoUpdateNecessary,
}

/// Computes the full label set to persist.
#[must_use]
pub fn reconcile(
    current: &LabelSet,
    classified: &LabelSet,
    event: &EventContext,
    config: &LabelConfiguration,
) -> Reconciliation {
    let (current_review, non_review) = current.partition(config);

    let mut review = classified.clone();
    if event.is_synchronize() {
        review.insert(config.updated());
        review.remove(config.changes_requested());
    }

    let mut keeps_updated = current_review.contains(config.updated());
    if event.is_review_submitted()
        && keeps_updated
        && review_status_changed(&review, &current_review, config)
    {
        keeps_updated = false;
    }
    if keeps_updated {
        review.insert(config.updated());
    }

    let labels = non_review.union(&review);
    if labels.is_empty() {
        Reconciliation::NoUpdateNecessary
    } else {
        Reconciliation::Apply(labels)
    }
}

/// The updated marker is excluded from the comparison: it is the label whose
/// fate is being decided.
fn review_status_changed(
    classified: &LabelSet,
    current_review: &LabelSet,
    config: &LabelConfiguration,
) -> bool {
    let mut previous = current_review.clone();
    previous.remove(config.updated());
    *classified != previous
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{Reconciliation, reconcile};
    use crate::review::event::{EventAction, EventContext, EventName};
    use crate::review::labels::{LabelConfiguration, LabelSet};

    #[fixture]
    fn config() -> LabelConfiguration {
        LabelConfiguration::new("approved-1", "approved-2", "changes", "updated")
            .expect("labels should be valid")
    }

    #[fixture]
    fn push() -> EventContext {
        EventContext::new(EventName::PullRequest, EventAction::Synchronize)
            .expect("pair should be supported")
    }

    #[fixture]
    fn review_submitted() -> EventContext {
        EventContext::new(EventName::PullRequestReview, EventAction::Submitted)
            .expect("pair should be supported")
    }

    fn labels(names: &[&str]) -> LabelSet {
        names.iter().copied().collect()
    }

    fn applied(names: &[&str]) -> Reconciliation {
        Reconciliation::Apply(labels(names))
    }

    #[rstest]
    fn first_approval_applies_one_approval_label(
        config: LabelConfiguration,
        review_submitted: EventContext,
    ) {
        let result = reconcile(&labels(&[]), &labels(&["approved-1"]), &review_submitted, &config);

        assert_eq!(result, applied(&["approved-1"]));
    }

    #[rstest]
    fn second_approval_replaces_tier(config: LabelConfiguration, review_submitted: EventContext) {
        let result = reconcile(
            &labels(&["approved-1"]),
            &labels(&["approved-2"]),
            &review_submitted,
            &config,
        );

        assert_eq!(result, applied(&["approved-2"]));
    }

    #[rstest]
    fn push_hides_change_request(config: LabelConfiguration, push: EventContext) {
        let result = reconcile(&labels(&[]), &labels(&["changes"]), &push, &config);

        assert_eq!(result, applied(&["updated"]));
    }

    #[rstest]
    fn push_keeps_unrelated_labels(config: LabelConfiguration, push: EventContext) {
        let result = reconcile(
            &labels(&["changes", "bug"]),
            &labels(&["changes"]),
            &push,
            &config,
        );

        assert_eq!(result, applied(&["bug", "updated"]));
    }

    #[rstest]
    fn push_keeps_approval_tier(config: LabelConfiguration) {
        let target = EventContext::new(EventName::PullRequestTarget, EventAction::Synchronize)
            .expect("pair should be supported");

        let result = reconcile(
            &labels(&["approved-2"]),
            &labels(&["approved-2"]),
            &target,
            &config,
        );

        assert_eq!(result, applied(&["approved-2", "updated"]));
    }

    #[rstest]
    fn distinguishing_review_retires_updated(
        config: LabelConfiguration,
        review_submitted: EventContext,
    ) {
        let result = reconcile(
            &labels(&["updated"]),
            &labels(&["approved-1"]),
            &review_submitted,
            &config,
        );

        assert_eq!(result, applied(&["approved-1"]));
    }

    #[rstest]
    fn unchanged_review_status_keeps_updated(
        config: LabelConfiguration,
        review_submitted: EventContext,
    ) {
        let result = reconcile(
            &labels(&["approved-1", "updated"]),
            &labels(&["approved-1"]),
            &review_submitted,
            &config,
        );

        assert_eq!(result, applied(&["approved-1", "updated"]));
    }

    #[rstest]
    fn change_request_after_push_retires_updated(
        config: LabelConfiguration,
        review_submitted: EventContext,
    ) {
        let result = reconcile(
            &labels(&["approved-1", "updated", "wip"]),
            &labels(&["approved-1", "changes"]),
            &review_submitted,
            &config,
        );

        assert_eq!(result, applied(&["approved-1", "changes", "wip"]));
    }

    #[rstest]
    fn stale_review_labels_are_dropped(
        config: LabelConfiguration,
        review_submitted: EventContext,
    ) {
        let result = reconcile(
            &labels(&["approved-2", "changes", "docs"]),
            &labels(&[]),
            &review_submitted,
            &config,
        );

        assert_eq!(result, applied(&["docs"]));
    }

    #[rstest]
    fn empty_result_needs_no_update(config: LabelConfiguration, review_submitted: EventContext) {
        let result = reconcile(
            &labels(&["changes"]),
            &labels(&[]),
            &review_submitted,
            &config,
        );

        assert_eq!(result, Reconciliation::NoUpdateNecessary);
    }

    #[rstest]
    #[case::push(true)]
    #[case::review(false)]
    fn reconciliation_is_idempotent(config: LabelConfiguration, #[case] is_push: bool) {
        let event = if is_push {
            EventContext::new(EventName::PullRequest, EventAction::Synchronize)
        } else {
            EventContext::new(EventName::PullRequestReview, EventAction::Submitted)
        }
        .expect("pair should be supported");
        let current = labels(&["approved-1", "updated", "bug"]);
        let classified = labels(&["approved-2", "changes"]);

        let first = reconcile(&current, &classified, &event, &config);
        let second = reconcile(&current, &classified, &event, &config);

        assert_eq!(first, second);
    }
}
