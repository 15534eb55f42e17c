//! Tests for the transport module

use super::*;
use crate::error::{Error, ErrorKind};
use crate::types::{JsonObject, OrderDirection};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn variables(first: u32) -> QueryVariables {
    QueryVariables {
        where_clause: JsonObject::new(),
        order_by: "createdAtBlockNumber".to_string(),
        order_direction: OrderDirection::Desc,
        first,
        skip: None,
    }
}

fn client_for(server: &MockServer) -> SubgraphClient {
    let config = SubgraphClientConfig::builder()
        .endpoint(server.uri())
        .no_rate_limit()
        .backoff(Duration::from_millis(1), Duration::from_millis(5))
        .build();
    SubgraphClient::with_config(config).unwrap()
}

// ============================================================================
// Variables Serialization Tests
// ============================================================================

#[test]
fn test_variables_serialize_wire_names() {
    let mut vars = variables(101);
    vars.where_clause
        .insert("id_gt".to_string(), json!("token-55"));

    let value = serde_json::to_value(&vars).unwrap();
    assert_eq!(value["where"]["id_gt"], json!("token-55"));
    assert_eq!(value["orderBy"], json!("createdAtBlockNumber"));
    assert_eq!(value["orderDirection"], json!("desc"));
    assert_eq!(value["first"], json!(101));
    // Absent skip is omitted entirely, not serialized as null.
    assert!(value.as_object().unwrap().get("skip").is_none());
}

#[test]
fn test_variables_serialize_skip_when_present() {
    let mut vars = variables(26);
    vars.skip = Some(75);

    let value = serde_json::to_value(&vars).unwrap();
    assert_eq!(value["skip"], json!(75));
}

// ============================================================================
// Client Tests
// ============================================================================

#[test]
fn test_client_rejects_invalid_endpoint() {
    let result = SubgraphClient::new("not a url");
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[tokio::test]
async fn test_request_returns_result_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({ "variables": { "first": 3 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "result": [ { "id": "a" }, { "id": "b" } ] }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let rows = client.request("query { result }", variables(3)).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], json!("a"));
}

#[tokio::test]
async fn test_request_surfaces_graphql_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [ { "message": "field does not exist" } ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .request("query { result }", variables(3))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Service);
    assert!(err.to_string().contains("field does not exist"));
}

#[tokio::test]
async fn test_request_client_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad query"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .request("query { result }", variables(3))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Status { status: 400, .. }));
}

#[tokio::test]
async fn test_request_retries_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "result": [ { "id": "recovered" } ] }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let rows = client.request("query { result }", variables(3)).await.unwrap();

    assert_eq!(rows[0]["id"], json!("recovered"));
}

#[tokio::test]
async fn test_request_exhausted_retries_surface_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let config = SubgraphClientConfig::builder()
        .endpoint(server.uri())
        .no_rate_limit()
        .max_retries(1)
        .backoff(Duration::from_millis(1), Duration::from_millis(2))
        .build();
    let client = SubgraphClient::with_config(config).unwrap();

    let err = client
        .request("query { result }", variables(3))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Status { status: 502, .. }));
}

#[tokio::test]
async fn test_request_missing_data_is_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .request("query { result }", variables(3))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Remote { .. }));
}

#[test]
fn test_config_builder() {
    let config = SubgraphClientConfig::builder()
        .endpoint("https://indexer.example/subgraphs/protocol")
        .timeout(Duration::from_secs(10))
        .max_retries(5)
        .rate_limit(RateLimiterConfig::new(20, 5))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.endpoint, "https://indexer.example/subgraphs/protocol");
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert_eq!(config.rate_limit.unwrap().requests_per_second, 20);
}
