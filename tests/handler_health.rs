mod common;

use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = TestServer::new(common::memory_app()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "Server is running");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let server = TestServer::new(common::memory_app()).unwrap();

    let response = server.get("/health").await;

    let request_id = response.header("x-request-id");
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let server = TestServer::new(common::memory_app()).unwrap();

    let response = server
        .get("/health")
        .add_header("x-request-id", "trace-me-123")
        .await;

    assert_eq!(response.header("x-request-id"), "trace-me-123");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = TestServer::new(common::memory_app()).unwrap();

    let response = server.get("/api/v2/users").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], true);
    assert_eq!(json["msg"], "Cannot GET /api/v2/users");
}
