//! Integration tests for the account API client using wiremock
//!
//! Verifies request shape, response decoding, and error mapping against
//! mocked account API endpoints.

use serde_json::json;
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use strata_account::{
    AccountApi, ActionMode, BucketScope, Error, PermissionInput, RestClient, ServiceAccountInput,
};

fn client(server: &MockServer) -> RestClient {
    RestClient::new(server.uri(), "test-token").unwrap()
}

#[tokio::test]
async fn create_permission_posts_payload_and_decodes_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/permissions"))
        .and(bearer_token("test-token"))
        .and(body_partial_json(json!({
            "name": "p1",
            "type": "bucket-names",
            "actions": "read-only",
            "buckets": ["b1", "b2"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "perm-123",
            "name": "p1",
            "type": "bucket-names",
            "actions": "read-only",
            "buckets": ["b1", "b2"],
            "ready_state": false
        })))
        .mount(&server)
        .await;

    let input = PermissionInput::new(
        "p1".to_string(),
        String::new(),
        ActionMode::ReadOnly,
        &BucketScope::BucketNames(vec!["b1".to_string(), "b2".to_string()]),
    );

    let record = client(&server).create_permission(&input).await.unwrap();
    assert_eq!(record.id, "perm-123");
    assert_eq!(record.permission_type, "bucket-names");
    assert_eq!(record.actions, ActionMode::ReadOnly);
    assert!(!record.ready_state);
}

#[tokio::test]
async fn get_permission_decodes_ready_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/permissions/perm-123"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "perm-123",
            "name": "p1",
            "type": "all-buckets",
            "actions": "all-operations",
            "ready_state": true
        })))
        .mount(&server)
        .await;

    let record = client(&server).get_permission("perm-123").await.unwrap();
    assert!(record.ready_state);
    assert!(record.buckets.is_empty());
}

#[tokio::test]
async fn missing_permission_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/permissions/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "permission not found"
        })))
        .mount(&server)
        .await;

    let err = client(&server).get_permission("gone").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { kind: "permission", ref id } if id == "gone"));
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/permissions/perm-123"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
        .mount(&server)
        .await;

    let err = client(&server).delete_permission("perm-123").await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("backend unavailable"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn delete_permission_accepts_empty_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/permissions/perm-123"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client(&server).delete_permission("perm-123").await.unwrap();
}

#[tokio::test]
async fn create_service_account_returns_one_time_keys() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/service-accounts"))
        .and(body_partial_json(json!({
            "name": "svc1",
            "permissions": ["perm-123"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "sa-1",
            "access_key": "AK1",
            "access_secret": "SK1"
        })))
        .mount(&server)
        .await;

    let input = ServiceAccountInput {
        name: "svc1".to_string(),
        description: String::new(),
        permissions: vec!["perm-123".to_string()],
    };

    let keys = client(&server).create_service_account(&input).await.unwrap();
    assert_eq!(keys.id, "sa-1");
    assert_eq!(keys.access_key, "AK1");
    assert_eq!(keys.access_secret, "SK1");
}
