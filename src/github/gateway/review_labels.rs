//! Octocrab implementation of the review and label gateway.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::error::LabelerError;
use crate::github::locator::{PersonalAccessToken, PullRequestLocator};
use crate::github::models::{ApiLabel, ApiReview, SetLabelsRequest, label_set};
use crate::review::{LabelSet, Review};

use super::ReviewLabelGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

const FETCH_REVIEWS: &str = "fetch PR reviews";
const FETCH_LABELS: &str = "fetch PR labels";
const UPDATE_LABELS: &str = "update PR labels";

/// Octocrab-backed gateway.
pub struct OctocrabLabelGateway {
    client: Octocrab,
}

impl OctocrabLabelGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and the locator's API
    /// base.
    ///
    /// Must be called within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `LabelerError::InvalidUrl` when the base URI cannot be parsed or
    /// `LabelerError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &PullRequestLocator,
    ) -> Result<Self, LabelerError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl ReviewLabelGateway for OctocrabLabelGateway {
    async fn list_reviews(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Review>, LabelerError> {
        let page = self
            .client
            .get::<Page<ApiReview>, _, _>(locator.reviews_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error(FETCH_REVIEWS, &error))?;

        let reviews = self
            .client
            .all_pages(page)
            .await
            .map_err(|error| map_octocrab_error(FETCH_REVIEWS, &error))?;
        tracing::info!("Found {} PR reviews.", reviews.len());

        Ok(reviews.into_iter().map(Review::from).collect())
    }

    async fn list_labels(&self, locator: &PullRequestLocator) -> Result<LabelSet, LabelerError> {
        let page = self
            .client
            .get::<Page<ApiLabel>, _, _>(locator.labels_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error(FETCH_LABELS, &error))?;

        let labels = self
            .client
            .all_pages(page)
            .await
            .map_err(|error| map_octocrab_error(FETCH_LABELS, &error))?;
        tracing::info!("Found {} existing labels.", labels.len());

        Ok(label_set(labels))
    }

    async fn set_labels(
        &self,
        locator: &PullRequestLocator,
        labels: &LabelSet,
    ) -> Result<(), LabelerError> {
        let body = SetLabelsRequest { labels };
        self.client
            .put::<Vec<ApiLabel>, _, _>(locator.labels_path(), Some(&body))
            .await
            .map(|_| ())
            .map_err(|error| map_octocrab_error(UPDATE_LABELS, &error))
    }
}
