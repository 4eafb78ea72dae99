//! Background worker for meal service requests.
//!
//! Network calls block, so they run on a dedicated thread that owns a
//! [`MealClient`]. The UI thread enqueues a request, receives a
//! [`WorkHandle`], and polls it from the flow executor once per frame.
//! Requests are served one at a time in submission order.

use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, mpsc},
    task::{Context, Poll},
};

use futures_channel::oneshot;

use mealviewer_core::{
    FetchError, HttpTransport, Meal, MealClient, Transport, client::BaseUrlError, parse_base_url,
};

/// Client type used by the worker thread.
pub(crate) type SharedClient = MealClient<Arc<dyn Transport>>;

/// A request served by the worker thread.
#[derive(Debug, Clone)]
enum WorkRequest {
    /// Fetch one random meal.
    RandomMeal,
    /// Search meals by name.
    Search(String),
    /// Download thumbnail bytes.
    Thumbnail(String),
}

/// A response produced by the worker thread.
#[derive(Debug, Clone)]
enum WorkResponse {
    RandomMeal(Result<Meal, FetchError>),
    Search(Result<Vec<Meal>, FetchError>),
    Thumbnail(Result<Vec<u8>, FetchError>),
}

/// Errors that can occur while scheduling or receiving background work.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum WorkError {
    /// The background channel was disconnected unexpectedly.
    #[display("worker disconnected")]
    WorkerDisconnected,
    /// Received a response that does not match the request.
    #[display("unexpected worker response")]
    UnexpectedResponse,
}

impl From<WorkError> for FetchError {
    fn from(err: WorkError) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Errors that prevent a worker from being started.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum WorkerInitError {
    #[display("invalid API base URL: {_0}")]
    BaseUrl(BaseUrlError),
    #[display("failed to initialize HTTP client: {_0}")]
    Transport(mealviewer_core::TransportError),
}

impl WorkRequest {
    /// Handle a request and produce the corresponding response.
    #[must_use]
    fn handle(self, client: &SharedClient) -> WorkResponse {
        match self {
            WorkRequest::RandomMeal => WorkResponse::RandomMeal(client.fetch_random_meal()),
            WorkRequest::Search(query) => {
                WorkResponse::Search(client.search_meals_by_name(&query))
            }
            WorkRequest::Thumbnail(url) => WorkResponse::Thumbnail(client.fetch_thumbnail(&url)),
        }
    }
}

struct WorkRequestEnvelope {
    request: WorkRequest,
    response_tx: oneshot::Sender<WorkResponse>,
}

/// Sending side of a worker thread.
///
/// Cloning shares the thread. The thread exits once every clone is dropped and
/// the requests already queued have been served.
#[derive(Clone)]
pub(crate) struct Worker {
    sender: mpsc::Sender<WorkRequestEnvelope>,
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker").finish_non_exhaustive()
    }
}

impl Worker {
    /// Starts a worker talking HTTP to the service at `base_url`.
    pub(crate) fn for_base_url(base_url: &str) -> Result<Self, WorkerInitError> {
        let base_url = parse_base_url(base_url)?;
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new()?);
        log::info!("starting worker for {base_url}");
        Ok(Self::spawn(MealClient::new(base_url, transport)))
    }

    /// Starts a worker thread that owns `client`.
    #[must_use]
    pub(crate) fn spawn(client: SharedClient) -> Self {
        let (tx, rx) = mpsc::channel::<WorkRequestEnvelope>();
        std::thread::spawn(move || {
            while let Ok(envelope) = rx.recv() {
                let response = envelope.request.handle(&client);
                let _ = envelope.response_tx.send(response);
            }
            log::debug!("worker thread exiting");
        });
        Self { sender: tx }
    }

    fn enqueue(&self, request: WorkRequest) -> Result<WorkHandle, WorkError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.sender
            .send(WorkRequestEnvelope {
                request,
                response_tx,
            })
            .map_err(|_| WorkError::WorkerDisconnected)?;
        Ok(WorkHandle {
            receiver: response_rx,
        })
    }

    /// Enqueue background work and return a future for the response.
    #[must_use]
    fn request(&self, request: WorkRequest) -> WorkResponseFuture {
        WorkResponseFuture::new(self.enqueue(request))
    }
}

/// A handle for polling background work completion.
struct WorkHandle {
    receiver: oneshot::Receiver<WorkResponse>,
}

impl WorkHandle {
    /// Attempts to poll for a completed response.
    fn poll(&mut self) -> Result<Option<WorkResponse>, WorkError> {
        self.receiver
            .try_recv()
            .map_err(|_| WorkError::WorkerDisconnected)
    }
}

/// Future that resolves to a background work response.
struct WorkResponseFuture {
    handle: Option<WorkHandle>,
    error: Option<WorkError>,
}

impl WorkResponseFuture {
    #[must_use]
    fn new(result: Result<WorkHandle, WorkError>) -> Self {
        match result {
            Ok(handle) => Self {
                handle: Some(handle),
                error: None,
            },
            Err(err) => Self {
                handle: None,
                error: Some(err),
            },
        }
    }
}

impl Future for WorkResponseFuture {
    type Output = Result<WorkResponse, WorkError>;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(err) = self.error.take() {
            return Poll::Ready(Err(err));
        }

        let Some(handle) = self.handle.as_mut() else {
            return Poll::Ready(Err(WorkError::WorkerDisconnected));
        };

        match handle.poll() {
            Ok(Some(response)) => Poll::Ready(Ok(response)),
            Ok(None) => Poll::Pending,
            Err(err) => Poll::Ready(Err(err)),
        }
    }
}

/// Fetch a random meal on the worker thread.
pub(crate) async fn request_random_meal(worker: &Worker) -> Result<Meal, FetchError> {
    match worker.request(WorkRequest::RandomMeal).await? {
        WorkResponse::RandomMeal(result) => result,
        _ => Err(WorkError::UnexpectedResponse.into()),
    }
}

/// Search meals by name on the worker thread.
pub(crate) async fn request_search(worker: &Worker, query: String) -> Result<Vec<Meal>, FetchError> {
    match worker.request(WorkRequest::Search(query)).await? {
        WorkResponse::Search(result) => result,
        _ => Err(WorkError::UnexpectedResponse.into()),
    }
}

/// Download a thumbnail on the worker thread.
pub(crate) async fn request_thumbnail(worker: &Worker, url: String) -> Result<Vec<u8>, FetchError> {
    match worker.request(WorkRequest::Thumbnail(url)).await? {
        WorkResponse::Thumbnail(result) => result,
        _ => Err(WorkError::UnexpectedResponse.into()),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use mealviewer_core::{MealClient, Transport, testing::FakeTransport};

    use super::Worker;

    /// Starts a worker backed by `transport`.
    pub(crate) fn fake_worker(transport: Arc<FakeTransport>) -> Worker {
        let transport: Arc<dyn Transport> = transport;
        Worker::spawn(MealClient::with_default_base_url(transport))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        future::Future,
        pin::pin,
        sync::Arc,
        task::{Context, Poll, Waker},
        time::{Duration, Instant},
    };

    use mealviewer_core::{FetchError, testing::FakeTransport};

    use super::{request_random_meal, request_search, request_thumbnail, testing::fake_worker};

    fn block_on<F: Future>(future: F) -> F::Output {
        let mut future = pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
                return output;
            }
            assert!(Instant::now() < deadline, "worker did not respond");
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn requests_are_served_in_order() {
        let transport = Arc::new(
            FakeTransport::new()
                .with_json(200, r#"{"meals":[{"strMeal":"Chicken Handi"}]}"#)
                .with_json(200, r#"{"meals":[{"strMeal":"Pasta A"}]}"#)
                .with_response(404, Vec::new()),
        );
        let worker = fake_worker(Arc::clone(&transport));

        let meal = block_on(request_random_meal(&worker)).unwrap();
        let meals = block_on(request_search(&worker, "pasta".into())).unwrap();
        let thumbnail = block_on(request_thumbnail(
            &worker,
            "https://example.test/a.jpg".into(),
        ));

        assert_eq!(meal.name(), "Chicken Handi");
        assert_eq!(meals[0].name(), "Pasta A");
        assert_eq!(thumbnail, Err(FetchError::Http(404)));
        assert_eq!(transport.call_count(), 3);
    }
}
