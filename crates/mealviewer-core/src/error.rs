//! Fetch failure taxonomy.

/// Failure of a single fetch against the meal service.
///
/// Every operation of [`MealClient`](crate::MealClient) reports failures through
/// this type; none of them panic or surface transport errors directly.
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, derive_more::Display, derive_more::Error,
)]
pub enum FetchError {
    /// The request never produced an HTTP response (DNS, refused connection, timeout, bad URL).
    #[display("{_0}")]
    Network(#[error(not(source))] String),
    /// The service answered with a status outside the 2xx range.
    #[display("HTTP error: status {_0}")]
    Http(#[error(not(source))] u16),
    /// A random-meal response was well formed but contained no meal.
    #[display("no meal found")]
    NotFound,
    /// A search was requested with an empty (or whitespace-only) query.
    #[display("search query is empty")]
    InvalidQuery,
    /// The response body was not the JSON envelope the service documents.
    #[display("unexpected response body: {_0}")]
    Decode(#[error(not(source))] String),
}

impl FetchError {
    /// Returns `true` if the request reached the service and got an answer.
    ///
    /// [`FetchError::InvalidQuery`] is reported as `false`: no request was sent.
    #[must_use]
    pub fn reached_service(&self) -> bool {
        matches!(self, Self::Http(_) | Self::NotFound | Self::Decode(_))
    }
}
