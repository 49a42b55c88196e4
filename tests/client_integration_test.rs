use battlemetrics::{Battlemetrics, ClientConfig, Error, NoteUpdate, ServerFilter};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: String) -> Battlemetrics {
    let config = ClientConfig {
        base_url,
        ..ClientConfig::new("test-token")
    };
    Battlemetrics::with_config(config).unwrap()
}

fn server_resource(id: &str, name: &str) -> serde_json::Value {
    json!({
        "type": "server",
        "id": id,
        "attributes": {
            "name": name,
            "address": null,
            "ip": "127.0.0.1",
            "port": 28015,
            "portQuery": 28017,
            "players": 42,
            "maxPlayers": 100,
            "rank": 12,
            "location": [-122.0, 47.6],
            "country": "US",
            "status": "online",
            "details": {"map": "Procedural Map"},
            "private": false,
            "createdAt": "2023-01-15T12:00:00.000Z",
            "updatedAt": "2024-06-01T08:30:00.000Z"
        },
        "relationships": {
            "game": {"data": {"type": "game", "id": "rust"}},
            "organization": {"data": {"type": "organization", "id": "9001"}}
        }
    })
}

#[tokio::test]
async fn test_get_server_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers/1234567"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": server_resource("1234567", "Test Server")})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let server = client.get_server(1234567).await.unwrap();

    assert_eq!(server.id, "1234567");
    assert_eq!(server.attributes.name, "Test Server");
    assert_eq!(server.attributes.players, 42);
    assert_eq!(server.attributes.max_players, 100);

    // Relationships stay lazy references.
    let game = server.relationships["game"].reference().unwrap();
    assert_eq!(game.kind, "game");
    assert_eq!(game.id, "rust");
}

#[tokio::test]
async fn test_list_servers_page_matches_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                server_resource("1", "alpha"),
                server_resource("2", "bravo"),
                server_resource("3", "charlie"),
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let mut pages = client.list_servers(&ServerFilter::default());

    let servers = pages.next_page().await.unwrap().unwrap();
    assert_eq!(servers.len(), 3);
    let ids: Vec<_> = servers.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);

    // No links.next: the cursor is exhausted.
    assert!(!pages.has_next());
    assert!(pages.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_server_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers/404404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"status": "404", "title": "Unknown Server"}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let err = client.get_server(404404).await.unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
    assert_eq!(err.api_errors()[0].title.as_deref(), Some("Unknown Server"));
}

#[tokio::test]
async fn test_missing_data_is_malformed_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {"total": 0}})))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let err = client.get_server(1).await.unwrap_err();

    match err {
        Error::MalformedResponse { detail, payload } => {
            assert!(detail.contains("data"));
            assert!(payload.contains("total"), "payload is kept for diagnosis");
        }
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_type_mismatch_is_malformed_response() {
    let mock_server = MockServer::start().await;

    // A player resource where a server was requested.
    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"type": "player", "id": "1", "attributes": {"name": "oops"}}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let err = client.get_server(1).await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{"status": "401", "title": "Unauthorized"}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let err = client.get_player(1).await.unwrap_err();

    match err {
        Error::Auth { status, .. } => assert_eq!(status.as_u16(), 401),
        other => panic!("expected Auth, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_request_is_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{"status": "400", "title": "Invalid filter", "detail": "bad page size"}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let mut pages = client.list_servers(&ServerFilter {
        page_size: Some(9999),
        ..ServerFilter::default()
    });
    let err = pages.next_page().await.unwrap_err();

    assert!(matches!(err, Error::Validation { .. }), "got {err:?}");
    assert_eq!(err.api_errors()[0].detail.as_deref(), Some("bad page size"));
}

#[tokio::test]
async fn test_server_error_is_not_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let err = client.get_ban(1).await.unwrap_err();

    match err {
        Error::Server { status, errors } => {
            assert_eq!(status.as_u16(), 503);
            assert!(errors.is_empty(), "non-JSON body yields no error objects");
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_note_sends_patch_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/players/7/relationships/notes/42"))
        .and(body_partial_json(json!({
            "data": {"type": "playerNote", "attributes": {"note": "updated", "shared": true}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "type": "playerNote",
                "id": "42",
                "attributes": {
                    "note": "updated",
                    "shared": true,
                    "clearanceLevel": 0,
                    "createdAt": "2024-03-01T10:00:00.000Z",
                    "expiresAt": null
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    let update = NoteUpdate {
        note: Some("updated".to_string()),
        shared: Some(true),
        ..NoteUpdate::default()
    };
    let note = client.update_note(7, 42, &update).await.unwrap();

    assert_eq!(note.id, "42");
    assert_eq!(note.attributes.note, "updated");
    assert!(note.attributes.shared);
}

#[tokio::test]
async fn test_delete_note_accepts_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/players/7/relationships/notes/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    client.delete_note(7, 42).await.unwrap();
}

#[tokio::test]
async fn test_force_update_posts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/servers/55/force-update"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(mock_server.uri());
    client.server_force_update(55).await.unwrap();
}
