//! View state for the meal viewer.
//!
//! This crate models what the application shows as an explicit state machine
//! instead of a tree of widgets that get created and destroyed on navigation.
//! A renderer (desktop window, terminal, JSON printer) reads a [`ViewState`]
//! and redraws from it; user actions and fetch completions are applied as
//! transitions.
//!
//! # Overview
//!
//! - [`view_state`]: [`ViewState`] and the [`View`] it is currently showing
//! - [`search_status`]: [`SearchStatus`], the message line of the search view
//! - [`home`]: [`HomeContent`], what the home view shows for the last random fetch
//!
//! # Examples
//!
//! ```
//! use mealviewer_core::{MealClient, testing::FakeTransport};
//! use mealviewer_session::{View, ViewState};
//!
//! let transport = FakeTransport::new().with_json(
//!     200,
//!     r#"{"meals":[{"strMeal":"Pasta A"},{"strMeal":"Pasta B"}]}"#,
//! );
//! let client = MealClient::with_default_base_url(&transport);
//!
//! let mut state = ViewState::new();
//! assert!(state.open_search());
//! assert!(state.submit_search(&client, "pasta"));
//! assert!(state.select_result(1));
//!
//! assert_eq!(state.current_view(), View::MealDetail);
//! assert_eq!(state.selected_meal().unwrap().name(), "Pasta B");
//! ```

pub mod home;
pub mod search_status;
pub mod view_state;

pub use self::{
    home::HomeContent,
    search_status::SearchStatus,
    view_state::{View, ViewState},
};
