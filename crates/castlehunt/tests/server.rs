//! Integration tests for the Castlehunt server: real sockets, raw HTTP.

use std::time::Duration;

use castlehunt::prelude::*;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

// =========================================================================
// Helpers
// =========================================================================

/// Starts a seeded server on a random port and returns its address.
async fn start_server() -> String {
    start_with(CastleHuntServer::builder()).await
}

async fn start_with(builder: CastleHuntServerBuilder) -> String {
    let server = builder
        .bind("127.0.0.1:0")
        .seed(42)
        .build()
        .await
        .expect("server should build");

    let addr = server
        .local_addr()
        .expect("should have local addr")
        .to_string();

    tokio::spawn(async move {
        let _ = server.run().await;
    });
    addr
}

/// Sends one raw request and returns the whole raw response.
async fn send_raw(addr: &str, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("should connect");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut response))
        .await
        .expect("response in time")
        .unwrap();
    String::from_utf8(response).unwrap()
}

/// Issues `GET target` and returns the parsed JSON body.
async fn get(addr: &str, target: &str) -> Value {
    let response =
        send_raw(addr, &format!("GET {target} HTTP/1.1\r\nHost: castle\r\n\r\n")).await;
    let (head, body) = response.split_once("\r\n\r\n").expect("header block");
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"), "{head}");
    assert!(head.contains(&format!("Content-Length: {}", body.len())));
    serde_json::from_str(body).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_state_of_fresh_game() {
    let addr = start_server().await;

    let state = get(&addr, "/api/state").await;

    assert_eq!(state["currentRoom"], "Entrance");
    assert_eq!(state["moves"], 0);
    assert_eq!(state["treasureLocations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_game_state_persists_across_connections() {
    let addr = start_server().await;

    let moved = get(&addr, "/api/move?room=Library").await;
    assert_eq!(moved["success"], true);

    let state = get(&addr, "/api/state").await;
    assert_eq!(state["currentRoom"], "Library");
    assert_eq!(state["moves"], 1);

    get(&addr, "/api/reset").await;
    let state = get(&addr, "/api/state").await;
    assert_eq!(state["currentRoom"], "Entrance");
}

#[tokio::test]
async fn test_response_carries_cors_headers() {
    let addr = start_server().await;

    let response = send_raw(&addr, "GET /api/hint HTTP/1.1\r\n\r\n").await;

    assert!(response.contains("Content-Type: application/json\r\n"));
    assert!(response.contains("Access-Control-Allow-Origin: *\r\n"));
    assert!(response.contains("Access-Control-Allow-Methods: GET, POST, OPTIONS\r\n"));
    assert!(response.contains("Access-Control-Allow-Headers: Content-Type\r\n"));
}

#[tokio::test]
async fn test_preflight_gets_no_content() {
    let addr = start_server().await;

    let response = send_raw(&addr, "OPTIONS /api/move HTTP/1.1\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 204 No Content\r\n"));
    assert!(response.contains("Access-Control-Max-Age: 86400\r\n"));
    assert!(response.ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_path_and_unknown_endpoint() {
    let addr = start_server().await;

    let path = get(&addr, "/api/path?start=Balcony&end=Dungeon").await;
    assert_eq!(
        path["path"],
        serde_json::json!(["Balcony", "Garden", "Kitchen", "Dungeon"])
    );

    let unknown = get(&addr, "/api/teleport?room=TreasureRoom").await;
    assert_eq!(unknown, serde_json::json!({"error": "Unknown endpoint"}));
}

#[tokio::test]
async fn test_silent_client_is_dropped_and_server_moves_on() {
    let addr = start_with(
        CastleHuntServer::builder().read_timeout(Duration::from_millis(100)),
    )
    .await;

    let mut silent = TcpStream::connect(&addr).await.unwrap();

    let state = get(&addr, "/api/state").await;
    assert_eq!(state["moves"], 0);

    let mut leftover = Vec::new();
    silent.read_to_end(&mut leftover).await.unwrap();
    assert!(leftover.is_empty());
}

#[tokio::test]
async fn test_request_line_without_blank_line_is_answered_at_deadline() {
    let addr = start_with(
        CastleHuntServer::builder().read_timeout(Duration::from_millis(200)),
    )
    .await;

    let mut client = TcpStream::connect(&addr).await.unwrap();
    // No terminating blank line, and the socket stays open for writing.
    client.write_all(b"GET /api/state HTTP/1.1\r\n").await.unwrap();

    let mut response = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), client.read_to_end(&mut response))
        .await
        .expect("response in time")
        .unwrap();
    let response = String::from_utf8(response).unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"), "{response}");
    let (_, body) = response.split_once("\r\n\r\n").unwrap();
    let state: Value = serde_json::from_str(body).unwrap();
    assert_eq!(state["currentRoom"], "Entrance");
}

#[tokio::test]
async fn test_run_until_stops_and_returns_final_game() {
    let server = CastleHuntServer::builder()
        .bind("127.0.0.1:0")
        .seed(42)
        .build()
        .await
        .unwrap();
    let addr = server.local_addr().unwrap().to_string();
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

    let running = tokio::spawn(server.run_until(async {
        let _ = stop_rx.await;
    }));

    get(&addr, "/api/move?room=Hall").await;
    stop_tx.send(()).unwrap();

    let router = tokio::time::timeout(Duration::from_secs(5), running)
        .await
        .expect("server stops in time")
        .unwrap();
    assert_eq!(router.session().current_room(), "Hall");
    assert_eq!(router.session().moves(), 1);
    assert!(TcpStream::connect(&addr).await.is_err());
}

#[tokio::test]
async fn test_build_rejects_rules_that_do_not_fit() {
    let config = SessionConfig {
        start_room: "Moat".into(),
        ..SessionConfig::default()
    };

    let result = CastleHuntServer::builder()
        .bind("127.0.0.1:0")
        .session_config(config)
        .build()
        .await;

    assert!(matches!(result, Err(HuntError::Castle(_))));
}

#[test]
fn test_console_game_plays_to_the_end() {
    use std::io::Cursor;

    let graph = CastleLayout::default().build().unwrap();
    let mut session = GameSession::with_seed(graph, SessionConfig::default(), 9).unwrap();
    session
        .reset_with_treasures(&["Kitchen", "Garden", "Balcony"])
        .unwrap();

    let mut out = Vec::new();
    let state = ConsoleGame::new(
        session,
        Cursor::new("Library\nKitchen\nGarden\nBalcony\n"),
        &mut out,
    )
    .run()
    .unwrap();

    assert_eq!(state, GameState::Won);
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Path: Entrance -> Library -> Kitchen"));
}
