//! End-to-end fetches over real HTTP against a mock endpoint.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::SAMPLE_USERS;
use std::sync::Arc;
use userdir::avatar::FixedDraw;
use userdir::config::Config;
use userdir::remote::{FetchError, RemoteUsers};
use userdir::users::UserStore;

fn store_for(mock: &MockBackend) -> UserStore {
    UserStore::with_draw_source(RemoteUsers::new(mock.users_url()), Arc::new(FixedDraw(0.5)))
}

#[tokio::test]
async fn test_fetch_over_http_success() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(SAMPLE_USERS)).await;
    let store = store_for(&mock);

    store.fetch_users().await;

    let state = store.snapshot();
    assert!(state.error.is_none());
    assert_eq!(state.users.len(), 2);
    assert!(state
        .users
        .iter()
        .all(|u| u.avatar == "https://i.pravatar.cc/150?img=36"));

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users");
}

#[tokio::test]
async fn test_fetch_over_http_server_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(500, "boom")).await;
    let store = store_for(&mock);

    store.fetch_users().await;

    assert!(store.users().is_empty());
    assert!(!store.loading());
    assert_eq!(store.error().as_deref(), Some("HTTP 500"));
}

#[tokio::test]
async fn test_fetch_single_attempt_no_retry() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(503, "unavailable")).await;
    mock.enqueue_response(MockResponse::json(SAMPLE_USERS)).await;
    let client = RemoteUsers::new(mock.users_url());

    let err = client.fetch_all().await.unwrap_err();

    assert_eq!(err, FetchError::Http { status: 503 });
    assert_eq!(mock.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn test_fetch_unreachable_host_is_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = RemoteUsers::new(format!("http://{}/users", addr));

    assert!(matches!(
        client.fetch_all().await,
        Err(FetchError::Transport(_))
    ));
}

#[tokio::test]
async fn test_store_from_config_uses_configured_url() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(SAMPLE_USERS)).await;
    let config = Config::with_api_url(mock.users_url());

    let store = UserStore::from_config(&config).unwrap();
    store.fetch_users().await;

    assert_eq!(store.users().len(), 2);
    assert_eq!(mock.captured_requests().await[0].path, "/users");
}
