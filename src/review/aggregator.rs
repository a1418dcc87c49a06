//! Reduction of raw reviews to one decisive review per author.

use std::collections::BTreeMap;

use super::model::Review;

/// Keeps the latest approving or change-requesting review of each author.
///
/// Reviews in any other state are discarded before the reduction, so an
/// author whose only reviews are comments does not appear in the result.
/// Reviews without a known author are discarded too. Recency is decided by
/// `submitted_at`; a missing timestamp sorts before any present one, and on
/// equal timestamps the review that appears later in `reviews` wins.
#[must_use]
pub fn latest_decisive_reviews(reviews: &[Review]) -> BTreeMap<String, Review> {
    let mut latest: BTreeMap<String, Review> = BTreeMap::new();

    for review in reviews.iter().filter(|review| review.state.is_decisive()) {
        let Some(author) = review.author.as_deref() else {
            continue;
        };

        let superseded = latest
            .get(author)
            .is_none_or(|existing| existing.submitted_at <= review.submitted_at);
        if superseded {
            latest.insert(author.to_owned(), review.clone());
        }
    }

    latest
}
