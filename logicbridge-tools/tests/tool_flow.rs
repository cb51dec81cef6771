//! End-to-end flow: register a workflow, expose it as a tool, call it,
//! and check the envelope the agent would receive.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use logicbridge_client::{LogicAppClient, StaticTokenCredential};
use logicbridge_tools::{LogicAppTool, Tool, ToolRegistry};

const TRIGGER: &str = "manual";

fn client_for(server: &MockServer) -> Arc<LogicAppClient> {
    Arc::new(
        LogicAppClient::builder(Arc::new(StaticTokenCredential::new("tok")))
            .subscription_id("sub-1")
            .resource_group("rg-demo")
            .management_endpoint(server.uri())
            .build()
            .unwrap(),
    )
}

fn mount_callback(server: &MockServer, workflow: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!(
            "/subscriptions/sub-1/resourceGroups/rg-demo/providers/Microsoft.Logic/workflows/{workflow}/triggers/{TRIGGER}/listCallbackUrl"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": format!("{}/trigger/{workflow}?sp=%2Ftriggers%2Fmanual%2Frun", server.uri())
        })))
}

#[tokio::test]
async fn tool_returns_success_envelope() {
    let server = MockServer::start().await;
    mount_callback(&server, "weatherflow").mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/trigger/weatherflow"))
        .and(wiremock::matchers::body_json(json!({"location": "Seattle"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "weather_data": "sunny"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.register("weatherflow", TRIGGER).await.unwrap();

    let tool = LogicAppTool::new(client, "weatherflow");
    let result = tool.call(json!({"location": "Seattle"})).await.unwrap();

    assert_eq!(
        result.as_json().unwrap(),
        &json!({"status": "success", "location": "Seattle", "forecast": "sunny"})
    );
}

#[tokio::test]
async fn tool_returns_error_envelope_on_workflow_failure() {
    let server = MockServer::start().await;
    mount_callback(&server, "weatherflow").mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/trigger/weatherflow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "failure",
            "error": "bad request"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.register("weatherflow", TRIGGER).await.unwrap();

    let tool = LogicAppTool::new(client, "weatherflow");
    let result = tool.call(json!({"location": "Seattle"})).await.unwrap();

    assert_eq!(
        result.as_json().unwrap(),
        &json!({"status": "error", "location": "Seattle", "error": "bad request"})
    );
}

#[tokio::test]
async fn tool_folds_transport_fault_into_error_envelope() {
    let server = MockServer::start().await;
    mount_callback(&server, "weatherflow").mount(&server).await;

    let client = client_for(&server);
    client.register("weatherflow", TRIGGER).await.unwrap();

    // Kill the endpoint; the cached callback URL now points at a dead port.
    drop(server);

    let tool = LogicAppTool::new(client, "weatherflow");
    let result = tool.call(json!({"location": "Seattle"})).await.unwrap();

    let envelope = result.as_json().unwrap();
    assert_eq!(envelope["status"], "error");
    assert_eq!(envelope["location"], "Seattle");
    assert!(!envelope["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn registry_dispatches_logic_app_tool() {
    let server = MockServer::start().await;
    mount_callback(&server, "weatherflow").mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/trigger/weatherflow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "data": "clear skies"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.register("weatherflow", TRIGGER).await.unwrap();

    let mut registry = ToolRegistry::new();
    registry.register(LogicAppTool::new(client, "weatherflow"));

    let defs = registry.definitions();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].name, "weatherflow");

    let result = registry
        .call("weatherflow", json!({"location": "Oslo"}))
        .await
        .unwrap();
    assert_eq!(
        result.as_json().unwrap(),
        &json!({"status": "success", "location": "Oslo", "forecast": "clear skies"})
    );
}
