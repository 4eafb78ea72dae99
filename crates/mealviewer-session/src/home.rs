//! What the home view displays.

use mealviewer_core::{FetchError, Meal};

use crate::ViewState;

/// Heading shown when the random-meal service returned no meal.
pub const NOT_FOUND_HEADING: &str = "No meal found.";
/// Heading shown when the random-meal fetch failed.
pub const FAILED_HEADING: &str = "Error fetching meal";

/// Contents of the home view, derived from a [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum HomeContent<'a> {
    /// Nothing has been fetched yet.
    Empty,
    /// The most recent random meal.
    Meal(&'a Meal),
    /// The service answered without a meal.
    NotFound,
    /// The fetch failed for any other reason.
    Failed(&'a FetchError),
}

impl<'a> HomeContent<'a> {
    /// Derives the home contents from `state`.
    #[must_use]
    pub fn of(state: &'a ViewState) -> Self {
        match (state.last_random_meal(), state.random_failure()) {
            (Some(meal), _) => HomeContent::Meal(meal),
            (None, Some(FetchError::NotFound)) => HomeContent::NotFound,
            (None, Some(err)) => HomeContent::Failed(err),
            (None, None) => HomeContent::Empty,
        }
    }

    /// The large label above the image.
    #[must_use]
    pub fn heading(&self) -> &'a str {
        match *self {
            HomeContent::Empty => "",
            HomeContent::Meal(meal) => meal.name(),
            HomeContent::NotFound => NOT_FOUND_HEADING,
            HomeContent::Failed(_) => FAILED_HEADING,
        }
    }

    /// The text of the instructions area.
    ///
    /// Failures put the error message here.
    #[must_use]
    pub fn body(&self) -> String {
        match self {
            HomeContent::Meal(meal) => meal.instructions().to_owned(),
            HomeContent::Failed(err) => err.to_string(),
            HomeContent::Empty | HomeContent::NotFound => String::new(),
        }
    }

    /// The meal whose thumbnail should be shown, if any.
    #[must_use]
    pub fn meal(&self) -> Option<&'a Meal> {
        match *self {
            HomeContent::Meal(meal) => Some(meal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use mealviewer_core::{FetchError, Meal};

    use super::HomeContent;
    use crate::ViewState;

    #[test]
    fn initial_state_is_empty() {
        let state = ViewState::new();
        let content = HomeContent::of(&state);
        assert!(content.is_empty());
        assert_eq!(content.heading(), "");
        assert_eq!(content.body(), "");
    }

    #[test]
    fn meal_shows_name_and_instructions() {
        let mut state = ViewState::new();
        state.apply_random_meal(Ok(Meal::new(
            "52795",
            Some("Chicken Handi"),
            Some("Cook it."),
            None,
        )));

        let content = HomeContent::of(&state);
        assert_eq!(content.heading(), "Chicken Handi");
        assert_eq!(content.body(), "Cook it.");
        assert_eq!(content.meal().map(Meal::name), Some("Chicken Handi"));
    }

    #[test]
    fn not_found_has_no_body() {
        let mut state = ViewState::new();
        state.apply_random_meal(Err(FetchError::NotFound));

        let content = HomeContent::of(&state);
        assert_eq!(content.heading(), "No meal found.");
        assert_eq!(content.body(), "");
        assert!(content.meal().is_none());
    }

    #[test]
    fn failure_puts_error_in_body() {
        let mut state = ViewState::new();
        state.apply_random_meal(Err(FetchError::Http(503)));

        let content = HomeContent::of(&state);
        assert_eq!(content.heading(), "Error fetching meal");
        assert_eq!(content.body(), FetchError::Http(503).to_string());
    }
}
