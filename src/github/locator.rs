//! Identity wrappers addressing a pull request on a GitHub host.

use url::Url;

use crate::error::LabelerError;

/// Default API base for github.com.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, LabelerError> {
        if value.trim().is_empty() {
            return Err(LabelerError::MissingPayloadField {
                field: "repository.owner.login".to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, LabelerError> {
        if value.trim().is_empty() {
            return Err(LabelerError::MissingPayloadField {
                field: "repository.name".to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    pub(crate) const fn new(value: u64) -> Result<Self, LabelerError> {
        if value == 0 {
            return Err(LabelerError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `LabelerError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, LabelerError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LabelerError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// A pull request on a specific GitHub API host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Builds a locator from its parts.
    ///
    /// `api_base` is the REST root, such as `https://api.github.com` or
    /// `https://ghe.example.com/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns `LabelerError::InvalidUrl` when `api_base` cannot be parsed,
    /// `MissingPayloadField` for a blank owner or repository, and
    /// `InvalidPullRequestNumber` for a zero number.
    pub fn new(
        api_base: &str,
        owner: &str,
        repository: &str,
        number: u64,
    ) -> Result<Self, LabelerError> {
        let base =
            Url::parse(api_base).map_err(|error| LabelerError::InvalidUrl(error.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(LabelerError::InvalidUrl(format!(
                "{base} cannot be used as an API base"
            )));
        }

        Ok(Self {
            api_base: base,
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repository)?,
            number: PullRequestNumber::new(number)?,
        })
    }

    /// API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    pub(crate) fn reviews_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/{}/reviews",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }

    /// Labels live on the issue backing the pull request.
    pub(crate) fn labels_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues/{}/labels",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}
