//! Core types for talking to the meal service.
//!
//! This crate retrieves meal records from a TheMealDB-compatible HTTP API and
//! normalizes them into a small, immutable data model. It holds no UI state;
//! the `mealviewer-session` crate builds the view state machine on top of it.
//!
//! # Overview
//!
//! - [`meal`]: the normalized [`Meal`] record and its JSON normalization rules
//! - [`error`]: [`FetchError`], the typed outcome of every failed fetch
//! - [`transport`]: the [`Transport`] seam and the reqwest-backed [`HttpTransport`]
//! - [`client`]: [`MealClient`], the stateless random/search/thumbnail client
//! - [`testing`]: a scripted fake transport for tests
//!
//! # Examples
//!
//! ```no_run
//! use mealviewer_core::{HttpTransport, MealClient};
//!
//! let transport = HttpTransport::new().unwrap();
//! let client = MealClient::with_default_base_url(transport);
//!
//! match client.fetch_random_meal() {
//!     Ok(meal) => println!("{}", meal.name()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod client;
pub mod error;
pub mod meal;
pub mod testing;
pub mod transport;

pub use self::{
    client::{DEFAULT_BASE_URL, MealClient, parse_base_url},
    error::FetchError,
    meal::Meal,
    transport::{HttpResponse, HttpTransport, Transport, TransportError},
};
