//! End-to-end tests: the console client against a live API server.
//!
//! Each test binds the router to an ephemeral port with an in-memory store.

use chrono::{TimeZone, Utc};
use console::{
    Board, ClientError, HealthCheckApi, HealthCheckForm, HttpClient, LoadPhase, SubmitOutcome,
};
use domain::NewHealthCheck;
use record_store::InMemoryRecordStore;

async fn spawn_server() -> (String, InMemoryRecordStore) {
    let store = InMemoryRecordStore::new();
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .build_recorder()
        .handle();
    let app = api::create_app(api::create_state(store.clone()), metrics_handle);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), store)
}

fn form(name: &str, feeling: &str, date: &str) -> HealthCheckForm {
    let mut form = HealthCheckForm::new(Utc::now());
    form.name = name.to_string();
    form.feeling = feeling.to_string();
    form.date = date.to_string();
    form
}

#[tokio::test]
async fn empty_server_loads_empty_board() {
    let (url, _) = spawn_server().await;
    let client = HttpClient::new(url).unwrap();
    let mut board = Board::new();

    board.load(&client).await;

    assert_eq!(board.load_phase(), LoadPhase::Ready);
    assert!(board.records().is_empty());
    assert!(board.error().is_none());
}

#[tokio::test]
async fn submit_then_reload_shows_newest_first() {
    let (url, store) = spawn_server().await;
    let client = HttpClient::new(url).unwrap();
    let mut board = Board::new();
    board.load(&client).await;

    for name in ["t1", "t2", "t3"] {
        let outcome = board
            .submit(&client, &mut form(name, "Good", "2024-06-01T09:30"))
            .await;
        assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
    }
    assert_eq!(store.record_count().await, 3);

    let mut fresh = Board::new();
    fresh.load(&client).await;

    let local: Vec<_> = board.records().iter().map(|r| r.name.as_str()).collect();
    let remote: Vec<_> = fresh.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(local, vec!["t3", "t2", "t1"]);
    assert_eq!(remote, local);
}

#[tokio::test]
async fn submitted_date_comes_back_as_same_instant() {
    let (url, _) = spawn_server().await;
    let client = HttpClient::new(url).unwrap();
    let mut board = Board::new();
    board.load(&client).await;

    let outcome = board
        .submit(&client, &mut form("Ana", "Good", "2024-01-01T10:00"))
        .await;

    let SubmitOutcome::Submitted(record) = outcome else {
        panic!("expected submission to succeed, got {outcome:?}");
    };
    assert_eq!(record.date, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
}

#[tokio::test]
async fn server_validation_message_reaches_client() {
    let (url, store) = spawn_server().await;
    let client = HttpClient::new(url).unwrap();

    // Bypasses the form so only the server checks the values.
    let err = client
        .create(&NewHealthCheck::new("", "Good", Utc::now()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Name is required");
    assert_eq!(store.record_count().await, 0);
}

#[tokio::test]
async fn unreachable_server_sets_board_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new(format!("http://{addr}")).unwrap();
    let mut board = Board::new();
    board.load(&client).await;

    assert_eq!(board.load_phase(), LoadPhase::Ready);
    assert!(board.error().unwrap().starts_with("HTTP error"));

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
