//! Orchestrates one label sync run against a gateway.

use crate::error::LabelerError;
use crate::github::gateway::ReviewLabelGateway;
use crate::github::locator::PullRequestLocator;
use crate::review::{
    EventContext, LabelConfiguration, LabelSet, Reconciliation, classify, latest_decisive_reviews,
    reconcile,
};

/// What a sync run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The label set was written to the pull request.
    Applied(LabelSet),
    /// The label set was computed but not written.
    DryRun(LabelSet),
    /// The reconciled set was empty, so nothing was written.
    NoUpdateNecessary,
}

/// Reads reviews and labels, reconciles them, and writes the result.
pub struct ReviewLabelSync<'client, Gateway>
where
    Gateway: ReviewLabelGateway,
{
    client: &'client Gateway,
    labels: &'client LabelConfiguration,
    dry_run: bool,
}

impl<'client, Gateway> ReviewLabelSync<'client, Gateway>
where
    Gateway: ReviewLabelGateway,
{
    /// Create a sync facade using the provided gateway and label names.
    #[must_use]
    pub const fn new(client: &'client Gateway, labels: &'client LabelConfiguration) -> Self {
        Self {
            client,
            labels,
            dry_run: false,
        }
    }

    /// Skip the final write, reporting the computed labels instead.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run one sync for the pull request.
    ///
    /// Reviews and labels are fetched concurrently; both must succeed before
    /// reconciliation starts. The write happens only when the reconciled set
    /// is non-empty.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway. No write is
    /// attempted after a failed read.
    pub async fn run(
        &self,
        locator: &PullRequestLocator,
        event: &EventContext,
    ) -> Result<SyncOutcome, LabelerError> {
        let (reviews, current) = tokio::try_join!(
            self.client.list_reviews(locator),
            self.client.list_labels(locator)
        )?;

        let decisive = latest_decisive_reviews(&reviews);
        let classified = classify(&decisive, self.labels);
        tracing::debug!(
            event = %event.name(),
            action = %event.action(),
            classified = %classified,
            current = %current,
            "reconciling labels"
        );

        let labels = match reconcile(&current, &classified, event, self.labels) {
            Reconciliation::Apply(labels) => labels,
            Reconciliation::NoUpdateNecessary => {
                tracing::info!("No label update necessary.");
                return Ok(SyncOutcome::NoUpdateNecessary);
            }
        };

        tracing::info!("New PR labels: {labels}");
        if self.dry_run {
            tracing::info!("Dry run: labels were not written.");
            return Ok(SyncOutcome::DryRun(labels));
        }

        self.client.set_labels(locator, &labels).await?;
        tracing::info!("Successfully updated the labels.");
        Ok(SyncOutcome::Applied(labels))
    }
}
