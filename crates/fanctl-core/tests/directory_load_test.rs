#![allow(clippy::unwrap_used)]
// Integration tests for the all-or-nothing directory loader.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fanctl_core::{Controller, ControllerConfig, CoreError, FanId, FanService, Power, SpeedCount, SpeedTier};

async fn setup() -> (MockServer, Controller) {
    let server = MockServer::start().await;
    let config = ControllerConfig::new(server.uri());
    let controller = Controller::new(&config).unwrap();
    (server, controller)
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "meta": { "rc": "ok" }, "data": data })
}

async fn mount_fan(server: &MockServer, uid: &str, name: &str, power: u8, speed: u8, seq: u8) {
    Mock::given(method("GET"))
        .and(path(format!("/api/fans/{uid}/info")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!([{ "name": name, "status": power }]))),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/fans/{uid}/status")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!([{ "speed": speed, "sequence": seq }]))),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn load_assembles_full_directory_in_discovery_order() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/fans"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!([{ "uid": "F002" }, { "uid": "F001" }]))),
        )
        .mount(&server)
        .await;

    mount_fan(&server, "F002", "Garage", 0, 1, 4).await;
    mount_fan(&server, "F001", "Attic", 1, 3, 0).await;

    let directory = controller.load_directory().await.unwrap();

    assert_eq!(directory.len(), 2);

    let names: Vec<&str> = directory.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Garage", "Attic"]);

    let attic = directory.get(&FanId::new("F001")).unwrap();
    assert_eq!(attic.power, Power::On);
    assert_eq!(attic.speed, SpeedTier::High);
    assert_eq!(attic.speeds, SpeedCount::Three);
}

#[tokio::test]
async fn single_fetch_failure_aborts_whole_load() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/fans"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!([{ "uid": "F001" }, { "uid": "F002" }]))),
        )
        .mount(&server)
        .await;

    mount_fan(&server, "F001", "Attic", 1, 3, 0).await;

    // F002's status endpoint rejects; its info endpoint still answers.
    Mock::given(method("GET"))
        .and(path("/api/fans/F002/info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!([{ "name": "Garage", "status": 1 }]))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/fans/F002/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "error", "msg": "fan offline" },
            "data": []
        })))
        .mount(&server)
        .await;

    let result = controller.load_directory().await;

    match result {
        Err(CoreError::Gateway { message }) => assert_eq!(message, "fan offline"),
        other => panic!("expected Gateway error, got: {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_fan_state_aborts_whole_load() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/fans"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(json!([{ "uid": "F001" }]))),
        )
        .mount(&server)
        .await;

    // Family code 7 has no tier-count mapping.
    mount_fan(&server, "F001", "Attic", 1, 3, 7).await;

    let result = controller.load_directory().await;

    assert!(
        matches!(result, Err(CoreError::Internal(_))),
        "expected Internal error, got: {result:?}"
    );
}
