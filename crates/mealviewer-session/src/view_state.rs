//! The view state machine.
//!
//! # Transitions
//!
//! | From            | Trigger              | To              |
//! |-----------------|----------------------|-----------------|
//! | `Home`          | random meal resolved | `Home`          |
//! | `Home`          | open search          | `SearchResults` |
//! | `SearchResults` | search resolved      | `SearchResults` |
//! | `SearchResults` | select result `i`    | `MealDetail`    |
//! | `SearchResults` | back                 | `Home`          |
//! | `MealDetail`    | back                 | `SearchResults` |
//!
//! User-action transitions return `false` and leave the state untouched when
//! triggered from the wrong view. Fetch resolutions (`apply_*`) always apply,
//! even if the user navigated away while the request was in flight; renderers
//! only show the fields that belong to the current view.

use mealviewer_core::{FetchError, Meal, MealClient, Transport};

use crate::SearchStatus;

/// One of the mutually exclusive display modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Random meal viewer with navigation to search.
    #[default]
    Home,
    /// Query input and result list.
    SearchResults,
    /// Full record of the meal picked from the result list.
    MealDetail,
}

/// Everything the application displays.
///
/// Created once at startup in [`View::Home`] with every field empty, then
/// mutated in place for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ViewState {
    current_view: View,
    last_random_meal: Option<Meal>,
    random_failure: Option<FetchError>,
    search_query: String,
    search_results: Vec<Meal>,
    search_status: SearchStatus,
    selected_meal: Option<Meal>,
}

impl ViewState {
    /// Creates the initial state: `Home`, nothing fetched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The view currently shown.
    #[must_use]
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// The meal shown on the home view, if the last random fetch succeeded.
    #[must_use]
    pub fn last_random_meal(&self) -> Option<&Meal> {
        self.last_random_meal.as_ref()
    }

    /// Why the last random fetch failed, if it did.
    #[must_use]
    pub fn random_failure(&self) -> Option<&FetchError> {
        self.random_failure.as_ref()
    }

    /// The last submitted query, trimmed.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Results of the last successful search, in server order.
    #[must_use]
    pub fn search_results(&self) -> &[Meal] {
        &self.search_results
    }

    /// Outcome of the last submitted search.
    #[must_use]
    pub fn search_status(&self) -> &SearchStatus {
        &self.search_status
    }

    /// The meal shown on the detail view.
    #[must_use]
    pub fn selected_meal(&self) -> Option<&Meal> {
        self.selected_meal.as_ref()
    }

    /// Applies the resolution of a random-meal fetch.
    ///
    /// On success the meal replaces the previous one and any recorded failure is
    /// cleared. On failure the previous meal is cleared and the error recorded.
    pub fn apply_random_meal(&mut self, result: Result<Meal, FetchError>) {
        match result {
            Ok(meal) => {
                log::debug!("random meal resolved: {}", meal.name());
                self.last_random_meal = Some(meal);
                self.random_failure = None;
            }
            Err(err) => {
                log::debug!("random meal failed: {err}");
                self.last_random_meal = None;
                self.random_failure = Some(err);
            }
        }
    }

    /// Home → SearchResults, with an empty query, result list and status.
    pub fn open_search(&mut self) -> bool {
        if !self.current_view.is_home() {
            return false;
        }
        self.current_view = View::SearchResults;
        self.search_query.clear();
        self.search_results.clear();
        self.search_status = SearchStatus::Idle;
        true
    }

    /// Records a submitted query and decides whether a request should be issued.
    ///
    /// Returns the trimmed query to search for, or `None` if it was empty, in
    /// which case [`SearchStatus::EmptyQuery`] is recorded and the result list
    /// is left as is. Also returns `None` outside the search view.
    pub fn begin_search(&mut self, query: &str) -> Option<String> {
        if !self.current_view.is_search_results() {
            return None;
        }
        let query = query.trim();
        if query.is_empty() {
            self.search_status = SearchStatus::EmptyQuery;
            return None;
        }
        self.search_query = query.to_owned();
        Some(self.search_query.clone())
    }

    /// Applies the resolution of a search request.
    ///
    /// On success the result list is replaced wholesale. On failure it is
    /// cleared and the error recorded.
    pub fn apply_search_results(&mut self, result: Result<Vec<Meal>, FetchError>) {
        match result {
            Ok(meals) => {
                log::debug!("search resolved with {} meal(s)", meals.len());
                self.search_status = SearchStatus::from_count(meals.len());
                self.search_results = meals;
            }
            Err(FetchError::InvalidQuery) => {
                self.search_results.clear();
                self.search_status = SearchStatus::EmptyQuery;
            }
            Err(err) => {
                log::debug!("search failed: {err}");
                self.search_results.clear();
                self.search_status = SearchStatus::Failed(err);
            }
        }
    }

    /// SearchResults → MealDetail for the result at `index`.
    ///
    /// Out-of-range indices are a no-op.
    pub fn select_result(&mut self, index: usize) -> bool {
        if !self.current_view.is_search_results() {
            return false;
        }
        let Some(meal) = self.search_results.get(index) else {
            log::warn!(
                "ignoring selection {index} of {} result(s)",
                self.search_results.len()
            );
            return false;
        };
        self.selected_meal = Some(meal.clone());
        self.current_view = View::MealDetail;
        true
    }

    /// SearchResults → Home, or MealDetail → SearchResults.
    ///
    /// Leaving the detail view clears the selection; the result list is kept.
    pub fn back(&mut self) -> bool {
        match self.current_view {
            View::Home => false,
            View::SearchResults => {
                self.current_view = View::Home;
                true
            }
            View::MealDetail => {
                self.selected_meal = None;
                self.current_view = View::SearchResults;
                true
            }
        }
    }

    /// Fetches a random meal and applies the result. Only valid on the home view.
    pub fn request_random_meal<T>(&mut self, client: &MealClient<T>) -> bool
    where
        T: Transport,
    {
        if !self.current_view.is_home() {
            return false;
        }
        self.apply_random_meal(client.fetch_random_meal());
        true
    }

    /// Submits `query` and applies the result. Only valid on the search view.
    ///
    /// An empty query records [`SearchStatus::EmptyQuery`] without calling the client.
    pub fn submit_search<T>(&mut self, client: &MealClient<T>, query: &str) -> bool
    where
        T: Transport,
    {
        if !self.current_view.is_search_results() {
            return false;
        }
        if let Some(query) = self.begin_search(query) {
            self.apply_search_results(client.search_meals_by_name(&query));
        }
        true
    }
}
