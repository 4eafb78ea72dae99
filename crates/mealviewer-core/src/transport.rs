//! HTTP transport seam.
//!
//! [`MealClient`](crate::MealClient) never talks to the network directly; it
//! issues GET requests through a [`Transport`]. The production implementation is
//! [`HttpTransport`], a thin wrapper over a blocking reqwest client. Tests swap in
//! a fake that returns canned responses and counts calls.

use url::Url;

/// A completed HTTP exchange: the final status code and the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Final status code after redirects.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response with the given status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A request that failed before any HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Creates an error carrying a human-readable description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Performs blocking HTTP GET requests.
///
/// Implementations must be safe to share between threads; the client holds one
/// transport and may be used from a background worker.
pub trait Transport: Send + Sync {
    /// Issues a GET request for `url`.
    ///
    /// Non-success status codes are returned as an [`HttpResponse`], not as an
    /// error. Only failures that prevent a response from arriving are errors.
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

impl<T> Transport for &T
where
    T: Transport + ?Sized,
{
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T> Transport for std::sync::Arc<T>
where
    T: Transport + ?Sized,
{
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

/// [`Transport`] backed by [`reqwest::blocking::Client`].
///
/// Redirects are followed and the client's default timeouts apply.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    const USER_AGENT: &'static str = concat!("mealviewer/", env!("CARGO_PKG_VERSION"));

    /// Builds a transport with a fresh connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(Self::USER_AGENT)
            .build()
            .map_err(|err| TransportError::new(err.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|err| TransportError::new(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|err| TransportError::new(err.to_string()))?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::HttpResponse;

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(304, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }
}
