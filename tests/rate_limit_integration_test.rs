use std::time::{Duration, Instant};

use battlemetrics::{Battlemetrics, ClientConfig, Error};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: String) -> Battlemetrics {
    let config = ClientConfig {
        base_url,
        ..ClientConfig::new("test-token")
    };
    Battlemetrics::with_config(config).unwrap()
}

fn server_document() -> serde_json::Value {
    json!({
        "data": {
            "type": "server",
            "id": "1",
            "attributes": {
                "name": "ok",
                "ip": "127.0.0.1",
                "port": 28015,
                "players": 1,
                "maxPlayers": 2,
                "country": "US",
                "status": "online"
            }
        }
    })
}

#[tokio::test]
async fn test_429_is_retried_once_after_retry_after() {
    let mock_server = MockServer::start().await;

    // First request is rate limited, the retry succeeds.
    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "1")
                .set_body_json(json!({"errors": [{"status": "429", "title": "Rate limited"}]})),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_document()))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let start = Instant::now();
    let server = client.get_server(1).await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(server.attributes.name, "ok");
    assert!(
        elapsed >= Duration::from_secs(1),
        "expected to honor Retry-After before the retry, waited {elapsed:?}"
    );
}

#[tokio::test]
async fn test_second_429_surfaces_rate_limit_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "1")
                .set_body_json(json!({"errors": [{"status": "429", "title": "Rate limited"}]})),
        )
        .expect(2) // initial attempt + exactly one retry
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let start = Instant::now();
    let err = client.get_server(1).await.unwrap_err();
    let elapsed = start.elapsed();

    match err {
        Error::RateLimit {
            retry_after,
            errors,
        } => {
            assert_eq!(retry_after, Some(Duration::from_secs(1)));
            assert_eq!(errors[0].title.as_deref(), Some("Rate limited"));
        }
        other => panic!("expected RateLimit, got {other:?}"),
    }
    assert!(
        elapsed >= Duration::from_secs(1),
        "the single retry must wait Retry-After, waited {elapsed:?}"
    );
}

#[tokio::test]
async fn test_exhausted_budget_delays_next_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Rate-Limit-Remaining", "0")
                .insert_header("X-Rate-Limit-Reset", "1")
                .set_body_json(server_document()),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    // First call consumes the budget; the response says none remain.
    client.get_server(1).await.unwrap();

    // Second call must wait for the advertised reset.
    let start = Instant::now();
    client.get_server(1).await.unwrap();
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_millis(900),
        "expected the second request to wait for the reset, waited {elapsed:?}"
    );
}

#[tokio::test]
async fn test_remaining_budget_does_not_delay() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Rate-Limit-Remaining", "50")
                .set_body_json(server_document()),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    let start = Instant::now();
    for _ in 0..3 {
        client.get_server(1).await.unwrap();
    }
    assert!(
        start.elapsed() < Duration::from_millis(500),
        "requests within budget must not sleep"
    );
}

#[tokio::test]
async fn test_concurrent_calls_share_one_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Rate-Limit-Remaining", "10")
                .set_body_json(server_document()),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());

    // Clones share the transport, the pool, and the budget.
    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move { client.get_server(1).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
}
