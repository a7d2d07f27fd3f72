//! Power operation behavior against a mock Foreman server

use foreman_client::{ClientError, Session, SessionConfig};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn session(server: &ServerGuard) -> Session {
    Session::new(SessionConfig {
        base_url: server.url(),
        ..SessionConfig::default()
    })
    .expect("session builds against mock server")
}

#[tokio::test]
async fn power_sends_exactly_one_put() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/v2/hosts/web01.example.com/power")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"power_action": "start"})))
        .with_status(200)
        .with_body(r#"{"power": true}"#)
        .expect(1)
        .create_async()
        .await;

    let body = session(&server)
        .power("web01.example.com", "start")
        .await
        .unwrap();

    assert_eq!(body, r#"{"power": true}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn rejected_action_surfaces_status_and_body() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/api/v2/hosts/web01.example.com/power")
        .with_status(422)
        .with_body(r#"{"error": "unknown power action"}"#)
        .create_async()
        .await;

    match session(&server).power("web01.example.com", "frobnicate").await {
        Err(ClientError::Api { status, body }) => {
            assert_eq!(status, 422);
            assert!(body.contains("unknown power action"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
