//! HTTP-level tests for the Logic App client against a mock control plane
//! and trigger endpoint.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use logicbridge_client::{LogicAppClient, StaticTokenCredential};

const TRIGGER: &str = "When_a_HTTP_request_is_received";

fn callback_path(workflow: &str) -> String {
    format!(
        "/subscriptions/sub-1/resourceGroups/rg-demo/providers/Microsoft.Logic/workflows/{workflow}/triggers/{TRIGGER}/listCallbackUrl"
    )
}

fn test_client(management_endpoint: &str) -> LogicAppClient {
    LogicAppClient::builder(Arc::new(StaticTokenCredential::new("tok-abc")))
        .subscription_id("sub-1")
        .resource_group("rg-demo")
        .management_endpoint(management_endpoint)
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn register_resolves_and_caches() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(callback_path("weatherflow")))
        .and(query_param("api-version", "2016-06-01"))
        .and(bearer_token("tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": format!("{}/trigger/weatherflow?sig=abc", server.uri()),
            "method": "POST"
        })))
        // Exactly one control-plane request; the second register is a cache hit.
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());

    let first = client.register("weatherflow", TRIGGER).await.unwrap();
    let second = client.register("weatherflow", TRIGGER).await.unwrap();

    assert_eq!(first, second);
    assert!(client.is_registered("weatherflow"));
    assert_eq!(client.callback_url("weatherflow"), Some(first));
}

#[tokio::test]
async fn register_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(callback_path("missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "WorkflowNotFound"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.register("missing", TRIGGER).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("not found"), "got: {err}");
    assert!(!client.is_registered("missing"));
}

#[tokio::test]
async fn register_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(callback_path("forbidden")))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.register("forbidden", TRIGGER).await.unwrap_err();
    assert!(err.to_string().contains("Not authorized"), "got: {err}");
}

#[tokio::test]
async fn invoke_posts_payload_and_returns_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(callback_path("weatherflow")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": format!("{}/trigger/weatherflow?sig=abc", server.uri())
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/trigger/weatherflow"))
        .and(query_param("sig", "abc"))
        .and(wiremock::matchers::body_json(json!({"location": "Seattle"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "weather_data": "sunny"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.register("weatherflow", TRIGGER).await.unwrap();

    let response = client
        .invoke("weatherflow", &json!({"location": "Seattle"}))
        .await
        .unwrap();

    assert_eq!(response["result"], "success");
    assert_eq!(response["weather_data"], "sunny");
}

#[tokio::test]
async fn invoke_non_success_status_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(callback_path("weatherflow")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": format!("{}/trigger/weatherflow", server.uri())
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/trigger/weatherflow"))
        .respond_with(ResponseTemplate::new(500).set_body_string("workflow exploded"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.register("weatherflow", TRIGGER).await.unwrap();

    let err = client
        .invoke("weatherflow", &json!({"location": "Oslo"}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("500"), "got: {err}");
}

#[tokio::test]
async fn invoke_accepted_with_empty_body_is_null() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(callback_path("fire-and-forget")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": format!("{}/trigger/fire-and-forget", server.uri())
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/trigger/fire-and-forget"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.register("fire-and-forget", TRIGGER).await.unwrap();

    let response = client
        .invoke("fire-and-forget", &json!({"location": "Lima"}))
        .await
        .unwrap();
    assert!(response.is_null());
}

#[tokio::test]
async fn invoke_refreshes_expired_callback_url_once() {
    let server = MockServer::start().await;

    // First resolution hands out the stale URL, second the fresh one.
    Mock::given(method("POST"))
        .and(path(callback_path("weatherflow")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": format!("{}/trigger/stale?sig=old", server.uri())
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(callback_path("weatherflow")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": format!("{}/trigger/fresh?sig=new", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/trigger/stale"))
        .respond_with(ResponseTemplate::new(401).set_body_string("signature expired"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/trigger/fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "data": "recovered"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.register("weatherflow", TRIGGER).await.unwrap();

    let response = client
        .invoke("weatherflow", &json!({"location": "Seattle"}))
        .await
        .unwrap();

    assert_eq!(response["data"], "recovered");
    // The cache now holds the fresh URL.
    let cached = client.callback_url("weatherflow").unwrap();
    assert!(cached.contains("/trigger/fresh"));
}
