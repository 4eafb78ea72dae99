//! Client for the meal service's random and search endpoints.

use serde_json::Value;
use url::Url;

use crate::{FetchError, Meal, Transport};

/// Base URL of the public TheMealDB v1 API (test key `1`).
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

const RANDOM_ENDPOINT: &str = "random.php";
const SEARCH_ENDPOINT: &str = "search.php";
const SEARCH_PARAM: &str = "s";

/// Error returned by [`parse_base_url`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BaseUrlError {
    /// The text is not a URL.
    #[display("invalid URL: {_0}")]
    Invalid(url::ParseError),
    /// The URL does not use `http` or `https`.
    #[display("unsupported scheme `{_0}`")]
    UnsupportedScheme(#[error(not(source))] String),
}

/// Parses a service base URL, appending a trailing `/` if missing.
///
/// Endpoint names are resolved relative to the base, so
/// `https://host/api/json/v1/1` and `https://host/api/json/v1/1/` are equivalent.
///
/// # Errors
///
/// Returns an error if `text` is not an absolute `http`/`https` URL.
///
/// # Examples
///
/// ```
/// use mealviewer_core::parse_base_url;
///
/// let url = parse_base_url("https://example.test/api/json/v1/1").unwrap();
/// assert_eq!(url.as_str(), "https://example.test/api/json/v1/1/");
/// assert!(parse_base_url("ftp://example.test/").is_err());
/// ```
pub fn parse_base_url(text: &str) -> Result<Url, BaseUrlError> {
    let mut url = Url::parse(text.trim()).map_err(BaseUrlError::Invalid)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(BaseUrlError::UnsupportedScheme(url.scheme().to_owned()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Stateless client for the meal service.
///
/// The client owns only its base URL and transport; every call is an independent
/// GET request. It is `Send + Sync` whenever the transport is, so one instance
/// can serve any number of callers.
///
/// None of the operations panic or return transport errors directly: every
/// failure is classified into a [`FetchError`].
#[derive(Debug, Clone)]
pub struct MealClient<T> {
    base_url: Url,
    transport: T,
}

impl<T> MealClient<T>
where
    T: Transport,
{
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// Use [`parse_base_url`] to obtain a correctly terminated base.
    #[must_use]
    pub fn new(base_url: Url, transport: T) -> Self {
        Self {
            base_url,
            transport,
        }
    }

    /// Creates a client for [`DEFAULT_BASE_URL`].
    ///
    /// # Panics
    ///
    /// Never in practice: the default base URL is a valid constant.
    #[must_use]
    pub fn with_default_base_url(transport: T) -> Self {
        let base_url = parse_base_url(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self::new(base_url, transport)
    }

    /// The base URL endpoints are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches one random meal.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] if no response arrived.
    /// - [`FetchError::Http`] for a non-2xx status.
    /// - [`FetchError::Decode`] if the body is not the documented JSON envelope.
    /// - [`FetchError::NotFound`] if the envelope holds no meal object.
    pub fn fetch_random_meal(&self) -> Result<Meal, FetchError> {
        let url = self.endpoint(RANDOM_ENDPOINT)?;
        let meals = self.get_meals(&url)?;
        let meal = meals
            .first()
            .and_then(Meal::from_json)
            .ok_or(FetchError::NotFound)?;
        log::debug!("random meal: {:?} ({})", meal.name(), meal.id());
        Ok(meal)
    }

    /// Searches meals whose name matches `query`.
    ///
    /// The query is trimmed first. Results keep the server's order; a response
    /// without matches is an empty success, not an error.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidQuery`] if the trimmed query is empty. No request is issued.
    /// - [`FetchError::Network`], [`FetchError::Http`], [`FetchError::Decode`] as for
    ///   [`fetch_random_meal`](Self::fetch_random_meal).
    pub fn search_meals_by_name(&self, query: &str) -> Result<Vec<Meal>, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FetchError::InvalidQuery);
        }

        let mut url = self.endpoint(SEARCH_ENDPOINT)?;
        url.query_pairs_mut().append_pair(SEARCH_PARAM, query);

        let meals: Vec<Meal> = self
            .get_meals(&url)?
            .iter()
            .filter_map(Meal::from_json)
            .collect();
        log::debug!("search {query:?}: {} meal(s)", meals.len());
        Ok(meals)
    }

    /// Downloads the raw bytes of a thumbnail image.
    ///
    /// Decoding is left to the caller, as is substituting a placeholder on failure.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] if `url` is not a valid URL or no response arrived.
    /// - [`FetchError::Http`] for a non-2xx status.
    pub fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(url)
            .map_err(|err| FetchError::Network(format!("invalid thumbnail URL `{url}`: {err}")))?;
        self.get(&url)
    }

    fn endpoint(&self, name: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(name)
            .map_err(|err| FetchError::Network(format!("invalid endpoint URL: {err}")))
    }

    fn get(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        log::debug!("GET {url}");
        let response = self.transport.get(url).map_err(|err| {
            log::warn!("GET {url} failed: {err}");
            FetchError::Network(err.to_string())
        })?;
        if !response.is_success() {
            log::warn!("GET {url} returned status {}", response.status);
            return Err(FetchError::Http(response.status));
        }
        Ok(response.body)
    }

    fn get_meals(&self, url: &Url) -> Result<Vec<Value>, FetchError> {
        let body = self.get(url)?;
        parse_meals_envelope(&body)
    }
}

/// Extracts the `meals` array from a response body.
///
/// A missing or `null` `meals` key yields an empty list.
fn parse_meals_envelope(body: &[u8]) -> Result<Vec<Value>, FetchError> {
    #[derive(serde::Deserialize)]
    struct MealsEnvelope {
        #[serde(default)]
        meals: Option<Vec<Value>>,
    }

    let envelope: MealsEnvelope = serde_json::from_slice(body).map_err(|err| {
        log::warn!("failed to decode meals envelope: {err}");
        FetchError::Decode(err.to_string())
    })?;
    Ok(envelope.meals.unwrap_or_default())
}
