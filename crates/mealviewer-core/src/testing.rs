//! Test utilities for code built on [`MealClient`](crate::MealClient).
//!
//! [`FakeTransport`] serves scripted responses in order and records every URL it
//! was asked for, so tests can assert both the outcome of a fetch and whether a
//! request was issued at all.
//!
//! # Example
//!
//! ```
//! use mealviewer_core::{FetchError, MealClient, testing::FakeTransport};
//!
//! let transport = FakeTransport::new().with_json(200, r#"{"meals": null}"#);
//! let client = MealClient::with_default_base_url(&transport);
//!
//! assert_eq!(client.fetch_random_meal(), Err(FetchError::NotFound));
//! assert_eq!(transport.call_count(), 1);
//! ```

use std::{collections::VecDeque, sync::Mutex};

use url::Url;

use crate::{HttpResponse, Transport, TransportError};

/// A scripted [`Transport`] for tests.
///
/// Responses are consumed front to back. When the script runs out, further
/// requests fail with a [`TransportError`].
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<Url>>,
}

impl FakeTransport {
    /// Creates a transport with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a response with the given status and body.
    #[must_use]
    pub fn with_response(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.push(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Appends a response with the given status and JSON text body.
    #[must_use]
    pub fn with_json(self, status: u16, body: &str) -> Self {
        self.with_response(status, body)
    }

    /// Appends a transport-level failure.
    #[must_use]
    pub fn with_error(self, message: &str) -> Self {
        self.push(Err(TransportError::new(message)));
        self
    }

    /// Appends an entry to the script.
    pub fn push(&self, response: Result<HttpResponse, TransportError>) {
        lock(&self.responses).push_back(response);
    }

    /// Number of requests served so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// URLs requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<Url> {
        lock(&self.requests).clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(url.clone());
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new(format!("no scripted response for {url}"))))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
