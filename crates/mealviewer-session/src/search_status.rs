//! Outcome line of the search view.

use mealviewer_core::FetchError;

/// What the search view reports about the last submitted query.
///
/// The [`Display`](std::fmt::Display) implementation renders the message shown
/// above the result list.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, serde::Serialize, derive_more::Display, derive_more::IsVariant,
)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SearchStatus {
    /// Nothing submitted since the search view was opened.
    #[default]
    #[display("")]
    Idle,
    /// The submitted query was empty after trimming; no request was issued.
    #[display("Please enter a meal name.")]
    EmptyQuery,
    /// The search succeeded with this many matches (at least one).
    #[display("Found {_0} meal(s).")]
    Found(usize),
    /// The search succeeded without matches.
    #[display("No meals found.")]
    NoMatches,
    /// The search failed; the result list was cleared.
    #[display("Error: {_0}")]
    Failed(FetchError),
}

impl SearchStatus {
    /// Status for a successful search that returned `count` meals.
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::NoMatches
        } else {
            Self::Found(count)
        }
    }

    /// Returns `true` if the status should be presented as an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::EmptyQuery | Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use mealviewer_core::FetchError;

    use super::SearchStatus;

    #[test]
    fn messages() {
        assert_eq!(SearchStatus::Idle.to_string(), "");
        assert_eq!(
            SearchStatus::EmptyQuery.to_string(),
            "Please enter a meal name."
        );
        assert_eq!(SearchStatus::Found(3).to_string(), "Found 3 meal(s).");
        assert_eq!(SearchStatus::NoMatches.to_string(), "No meals found.");
        assert_eq!(
            SearchStatus::Failed(FetchError::Http(502)).to_string(),
            "Error: HTTP error: status 502"
        );
    }

    #[test]
    fn from_count_distinguishes_empty() {
        assert_eq!(SearchStatus::from_count(0), SearchStatus::NoMatches);
        assert_eq!(SearchStatus::from_count(2), SearchStatus::Found(2));
    }

    #[test]
    fn errors() {
        assert!(SearchStatus::EmptyQuery.is_error());
        assert!(SearchStatus::Failed(FetchError::NotFound).is_error());
        assert!(!SearchStatus::NoMatches.is_error());
        assert!(!SearchStatus::Idle.is_error());
    }
}
