//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;
use userdir::avatar::FixedDraw;
use userdir::remote::{FetchError, RemoteUsers, Transport, TransportResponse};
use userdir::users::UserStore;

pub const TEST_URL: &str = "http://users.test/users";

/// Two-user payload in the remote wire format.
pub const SAMPLE_USERS: &str = r#"[
    {"id": 1, "name": "Alice", "username": "alice", "email": "alice@example.com"},
    {"id": 2, "name": "Bob", "username": "bob", "email": "bob@example.com"}
]"#;

/// Transport returning queued responses in order, then empty lists.
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, FetchError>>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<TransportResponse, FetchError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn ok(body: &str) -> Arc<Self> {
        Self::new(vec![Ok(TransportResponse::new(200, body))])
    }

    pub fn status(status: u16) -> Arc<Self> {
        Self::new(vec![Ok(TransportResponse::new(status, ""))])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, _url: &str) -> Result<TransportResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::new(200, "[]")))
    }
}

/// Transport whose responses are released by the test, one gate per call.
pub struct GatedTransport {
    gates: Mutex<VecDeque<oneshot::Receiver<TransportResponse>>>,
    calls: AtomicUsize,
}

impl GatedTransport {
    /// Returns the transport plus one sender per expected call.
    pub fn new(expected_calls: usize) -> (Arc<Self>, Vec<oneshot::Sender<TransportResponse>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..expected_calls).map(|_| oneshot::channel()).unzip();
        let transport = Arc::new(Self {
            gates: Mutex::new(receivers),
            calls: AtomicUsize::new(0),
        });
        (transport, senders)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Yield until `n` requests are parked on their gates.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn get(&self, _url: &str) -> Result<TransportResponse, FetchError> {
        let gate = self
            .gates
            .lock()
            .pop_front()
            .ok_or_else(|| FetchError::Transport("unexpected request".to_string()))?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        gate.await
            .map_err(|_| FetchError::Transport("gate dropped".to_string()))
    }
}

/// Store over `transport` with avatar draws fixed at `draw`.
pub fn store_with(transport: Arc<dyn Transport>, draw: f64) -> UserStore {
    UserStore::with_draw_source(
        RemoteUsers::with_transport(TEST_URL, transport),
        Arc::new(FixedDraw(draw)),
    )
}

/// Store whose fetches always return an empty list.
pub fn local_store() -> UserStore {
    store_with(ScriptedTransport::new(Vec::new()), 0.5)
}
