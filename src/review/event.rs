//! The event that triggered a run and its validation.

use std::fmt;

use crate::error::LabelerError;

/// Repository events that can trigger a label sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventName {
    /// `pull_request`
    PullRequest,
    /// `pull_request_target`
    PullRequestTarget,
    /// `pull_request_review`
    PullRequestReview,
}

impl EventName {
    /// Parses the event name reported by the runner.
    ///
    /// # Errors
    ///
    /// Returns [`LabelerError::UnsupportedEvent`] for any other event.
    pub fn parse(value: &str) -> Result<Self, LabelerError> {
        match value.trim() {
            "pull_request" => Ok(Self::PullRequest),
            "pull_request_target" => Ok(Self::PullRequestTarget),
            "pull_request_review" => Ok(Self::PullRequestReview),
            other => Err(LabelerError::UnsupportedEvent {
                event: other.to_owned(),
            }),
        }
    }

    /// Wire name of the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PullRequest => "pull_request",
            Self::PullRequestTarget => "pull_request_target",
            Self::PullRequestReview => "pull_request_review",
        }
    }

    /// The only action accepted for this event.
    #[must_use]
    pub const fn supported_action(self) -> EventAction {
        match self {
            Self::PullRequest | Self::PullRequestTarget => EventAction::Synchronize,
            Self::PullRequestReview => EventAction::Submitted,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Activity types handled by the label sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    /// New commits were pushed to the pull request.
    Synchronize,
    /// A review was submitted.
    Submitted,
}

impl EventAction {
    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Synchronize => "synchronize",
            Self::Submitted => "submitted",
        }
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A validated `(event, action)` pair.
///
/// Only `(pull_request | pull_request_target, synchronize)` and
/// `(pull_request_review, submitted)` can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventContext {
    name: EventName,
    action: EventAction,
}

impl EventContext {
    /// Validates the pairing of an event and action.
    ///
    /// # Errors
    ///
    /// Returns [`LabelerError::UnsupportedAction`] when the action is not the
    /// one the event supports.
    pub fn new(name: EventName, action: EventAction) -> Result<Self, LabelerError> {
        let expected = name.supported_action();
        if action != expected {
            return Err(unsupported_action(name, action.as_str()));
        }
        Ok(Self { name, action })
    }

    /// Validates raw event and action strings.
    ///
    /// # Errors
    ///
    /// Returns [`LabelerError::UnsupportedEvent`] for an unknown event and
    /// [`LabelerError::UnsupportedAction`] when the action does not match
    /// the event.
    pub fn parse(event_name: &str, action: &str) -> Result<Self, LabelerError> {
        let name = EventName::parse(event_name)?;
        let expected = name.supported_action();
        if action.trim() != expected.as_str() {
            return Err(unsupported_action(name, action.trim()));
        }
        Ok(Self {
            name,
            action: expected,
        })
    }

    /// The triggering event.
    #[must_use]
    pub const fn name(self) -> EventName {
        self.name
    }

    /// The triggering action.
    #[must_use]
    pub const fn action(self) -> EventAction {
        self.action
    }

    /// Returns true when new commits were pushed.
    #[must_use]
    pub const fn is_synchronize(self) -> bool {
        matches!(
            (self.name, self.action),
            (
                EventName::PullRequest | EventName::PullRequestTarget,
                EventAction::Synchronize
            )
        )
    }

    /// Returns true when a review was submitted.
    #[must_use]
    pub const fn is_review_submitted(self) -> bool {
        matches!(
            (self.name, self.action),
            (EventName::PullRequestReview, EventAction::Submitted)
        )
    }
}

fn unsupported_action(name: EventName, action: &str) -> LabelerError {
    LabelerError::UnsupportedAction {
        event: name.as_str().to_owned(),
        action: action.to_owned(),
        expected: name.supported_action().as_str().to_owned(),
    }
}
