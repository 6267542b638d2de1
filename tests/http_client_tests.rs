//! Integration tests for the HTTP transport layer.

use serde_json::json;
use tokio_test::assert_ok;
use skroutz_api::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use skroutz_api::{ApiHost, ApiVersion, ClientId, ClientSecret, Session, SkroutzConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> SkroutzConfig {
    SkroutzConfig::builder()
        .client_id(ClientId::new("test-id").unwrap())
        .client_secret(ClientSecret::new("test-secret").unwrap())
        .api_host(ApiHost::new(server.uri()).unwrap())
        .api_version(ApiVersion::V3_1)
        .build()
        .unwrap()
}

fn test_session() -> Session {
    Session::new("test-token".to_string(), "public".parse().unwrap(), None)
}

#[tokio::test]
async fn default_headers_reach_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(header("Accept", "application/vnd.skroutz+json; version=3.1"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"categories": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_session(), Some(&config_for(&mock_server)));
    let request = HttpRequest::builder(HttpMethod::Get, "categories")
        .build()
        .unwrap();

    let response = assert_ok!(client.request(request).await);
    assert!(response.is_ok());
}

#[tokio::test]
async fn non_2xx_response_becomes_http_error_with_serialized_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories/999999"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({
                    "errors": [{"code": "not_found", "messages": ["Category not found"]}]
                }))
                .insert_header("x-request-id", "req-abc-123"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_session(), Some(&config_for(&mock_server)));
    let request = HttpRequest::builder(HttpMethod::Get, "categories/999999")
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 404);
            assert!(e.message.contains("not_found"));
            assert_eq!(e.request_id.as_deref(), Some("req-abc-123"));
        }
        other => panic!("Expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_request_is_rejected_before_any_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_session(), Some(&config_for(&mock_server)));

    // A POST without a body fails verification locally.
    let request = HttpRequest {
        http_method: HttpMethod::Post,
        path: "user/addresses".to_string(),
        body: None,
        body_type: None,
        query: None,
        extra_headers: None,
    };

    let result = client.request(request).await;
    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
}

#[tokio::test]
async fn rate_limit_headers_are_parsed_into_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"categories": []}))
                .insert_header("x-ratelimit-limit", "100")
                .insert_header("x-ratelimit-remaining", "97")
                .insert_header("x-ratelimit-reset", "1420702800"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_session(), Some(&config_for(&mock_server)));
    let request = HttpRequest::builder(HttpMethod::Get, "categories")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    let rate_limit = response.rate_limit.unwrap();
    assert_eq!(rate_limit.limit, 100);
    assert_eq!(rate_limit.remaining, 97);
}

#[tokio::test]
async fn link_header_is_parsed_into_pagination_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/manufacturers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"manufacturers": []}))
                .insert_header(
                    "link",
                    "<https://api.skroutz.gr/manufacturers?page=3&per=25>; rel=\"next\", \
                     <https://api.skroutz.gr/manufacturers?page=1&per=25>; rel=\"prev\"",
                ),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_session(), Some(&config_for(&mock_server)));
    let request = HttpRequest::builder(HttpMethod::Get, "manufacturers")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    let pagination = response.pagination.unwrap();
    assert_eq!(pagination.next_page, Some(3));
    assert_eq!(pagination.prev_page, Some(1));
}

#[tokio::test]
async fn non_json_error_body_is_preserved_as_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_session(), Some(&config_for(&mock_server)));
    let request = HttpRequest::builder(HttpMethod::Get, "categories")
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 502);
            assert!(e.message.contains("Bad Gateway"));
        }
        other => panic!("Expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn each_execute_makes_exactly_one_call() {
    let mock_server = MockServer::start().await;

    // A 500 must surface immediately, never retried.
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"errors": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&test_session(), Some(&config_for(&mock_server)));
    let request = HttpRequest::builder(HttpMethod::Get, "categories")
        .build()
        .unwrap();

    let result = client.request(request).await;
    assert!(matches!(result, Err(HttpError::Response(_))));
    // MockServer verifies on drop that exactly one request arrived.
}
