//! Integration tests for the VPS client using wiremock mock server

use iw_config::VpsConfig;
use iw_vps::{PowerState, VpsClient, VpsError};

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const SERVER_PATH: &str = "/v1/servers/42";
const TOKEN: &str = "test-token";

fn client_for(mock_server: &MockServer) -> VpsClient {
    let api_url = format!("{}{}", mock_server.uri(), SERVER_PATH);
    VpsClient::new(&api_url, TOKEN, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_power_state_on() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SERVER_PATH))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Name": "mc-host",
            "IsPowerOn": true
        })))
        .mount(&mock_server)
        .await;

    let state = client_for(&mock_server).power_state().await.unwrap();

    assert_eq!(state, PowerState::On);
}

#[tokio::test]
async fn test_power_state_off() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SERVER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "IsPowerOn": false })))
        .mount(&mock_server)
        .await;

    let state = client_for(&mock_server).power_state().await.unwrap();

    assert_eq!(state, PowerState::Off);
}

#[tokio::test]
async fn test_power_state_unknown_when_field_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SERVER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "IsPowerOn": "yes" })))
        .mount(&mock_server)
        .await;

    let state = client_for(&mock_server).power_state().await.unwrap();

    assert_eq!(state, PowerState::Unknown);
}

#[tokio::test]
async fn test_power_off_posts_action() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/servers/42/Action"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({ "Type": "PowerOff" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Id": 7,
            "State": "InProgress"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = client_for(&mock_server).power_off().await.unwrap();

    assert_eq!(state.as_str(), "InProgress");
}

#[tokio::test]
async fn test_power_on_posts_action() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/servers/42/Action"))
        .and(body_json(json!({ "Type": "PowerOn" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "State": "Completed" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = client_for(&mock_server).power_on().await.unwrap();

    assert_eq!(state.to_string(), "Completed");
}

#[tokio::test]
async fn test_action_state_unknown_when_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/servers/42/Action"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let state = client_for(&mock_server).power_off().await.unwrap();

    assert_eq!(state.as_str(), "Unknown");
}

#[tokio::test]
async fn test_api_error_carries_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SERVER_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).power_state().await;

    match result {
        Err(VpsError::Api { status, body, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid token");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_api_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SERVER_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "IsPowerOn": true }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let api_url = format!("{}{}", mock_server.uri(), SERVER_PATH);
    let client = VpsClient::new(&api_url, TOKEN, Duration::from_millis(200)).unwrap();
    let result = client.power_state().await;

    assert!(matches!(result, Err(VpsError::Http { .. })));
}

#[tokio::test]
async fn test_trailing_slash_in_url_is_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/servers/42/Action"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "State": "InProgress" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api_url = format!("{}{}/", mock_server.uri(), SERVER_PATH);
    let client = VpsClient::new(&api_url, TOKEN, Duration::from_secs(5)).unwrap();

    assert!(client.power_off().await.is_ok());
}

#[test]
fn test_from_config_requires_url_and_token() {
    let missing_url = VpsConfig {
        api_token: Some(String::from(TOKEN)),
        ..VpsConfig::default()
    };
    let missing_token = VpsConfig {
        api_url: Some(String::from("https://vps.example.test/v1/servers/42")),
        ..VpsConfig::default()
    };

    assert!(matches!(
        VpsClient::from_config(&missing_url),
        Err(VpsError::NotConfigured { .. })
    ));
    assert!(matches!(
        VpsClient::from_config(&missing_token),
        Err(VpsError::NotConfigured { .. })
    ));
}
