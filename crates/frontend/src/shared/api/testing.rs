//! In-memory transports and a reactive runtime for unit tests.

use super::{ApiClient, ApiError, ApiRequest, ApiResponse, HttpTransport};
use crate::shared::config::AppConfig;
use any_spawner::Executor;
use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::reactive::owner::Owner;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Records every request and answers with queued responses.
/// When the queue is empty it answers `200 {}`.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(ApiResponse {
                    status: 200,
                    body: "{}".to_string(),
                })
            })
    }
}

/// Holds every request open until the test answers it, in any order.
#[derive(Clone, Default)]
pub struct HeldTransport {
    pending: Arc<Mutex<Vec<(ApiRequest, Option<oneshot::Sender<ApiResponse>>)>>>,
}

impl HeldTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs of all requests received so far
    pub fn urls(&self) -> Vec<String> {
        self.pending
            .lock()
            .unwrap()
            .iter()
            .map(|(request, _)| request.url.clone())
            .collect()
    }

    /// Answer the `index`-th request received
    pub fn answer(&self, index: usize, status: u16, body: &str) {
        let sender = self.pending.lock().unwrap()[index].1.take().unwrap();
        sender
            .send(ApiResponse {
                status,
                body: body.to_string(),
            })
            .unwrap();
    }
}

#[async_trait(?Send)]
impl HttpTransport for HeldTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let (sender, receiver) = oneshot::channel();
        self.pending.lock().unwrap().push((request, Some(sender)));
        receiver
            .await
            .map_err(|_| ApiError::Network("request dropped".into()))
    }
}

fn test_token() -> Option<String> {
    Some("test-token".to_string())
}

/// Client pointed at `http://api.test` sending through `transport`
pub fn client_with(transport: Arc<dyn HttpTransport>) -> ApiClient {
    let config = AppConfig::resolve(Some("http://api.test"), None, String::new);
    ApiClient::with_transport(config, transport, test_token)
}

/// Client pointed at `http://api.test` sharing `transport`'s recorder
pub fn test_client(transport: &RecordingTransport) -> ApiClient {
    client_with(Arc::new(transport.clone()))
}

/// Installs a reactive owner and a thread-local futures executor, so signals,
/// effects and `spawn_local` tasks work outside the browser.
///
/// Keep the returned owner alive for the duration of the test.
pub fn reactive_runtime() -> Owner {
    // another test on this process may have installed it already
    let _ = Executor::init_futures_executor();
    let owner = Owner::new();
    owner.set();
    owner
}

/// Runs spawned tasks and effects until none can make progress
pub fn settle() {
    Executor::poll_local();
}
