//! Integration tests for the path-forwarding proxy.

use std::time::Duration;

use reqwest::Method;

mod common;

fn assert_cors_headers(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("allow-origin header missing"),
        "*"
    );
    assert_eq!(
        headers
            .get("access-control-allow-headers")
            .expect("allow-headers header missing"),
        "authorization, x-client-info, apikey, content-type"
    );
    assert_eq!(
        headers
            .get("access-control-allow-methods")
            .expect("allow-methods header missing"),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
}

#[tokio::test]
async fn preflight_short_circuits_without_touching_upstream() {
    let (upstream_addr, mut upstream_rx) = common::start_mock_upstream(200, None, "ok").await;
    let config = common::test_config(&format!("http://{upstream_addr}"));
    let (addr, shutdown) = common::spawn_gateway(config).await;

    let client = reqwest::Client::new();
    let response = client
        .request(
            Method::OPTIONS,
            format!("http://{addr}/api-proxy?path=/api/candidates"),
        )
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(response.status(), 200);
    assert_cors_headers(&response);
    assert_eq!(response.text().await.unwrap(), "");

    // The preflight must never be forwarded.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(upstream_rx.try_recv().is_err());

    shutdown.trigger();
}

#[tokio::test]
async fn missing_path_parameter_is_400() {
    let config = common::test_config("http://127.0.0.1:1");
    let (addr, shutdown) = common::spawn_gateway(config).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/api-proxy"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_cors_headers(&response);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"error":"Missing path parameter"}"#
    );

    shutdown.trigger();
}

#[tokio::test]
async fn empty_path_parameter_is_400() {
    let config = common::test_config("http://127.0.0.1:1");
    let (addr, shutdown) = common::spawn_gateway(config).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api-proxy?path="))
        .body("{}")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"error":"Missing path parameter"}"#
    );

    shutdown.trigger();
}

#[tokio::test]
async fn get_never_forwards_a_body() {
    let (upstream_addr, mut upstream_rx) = common::start_mock_upstream(200, None, "ok").await;
    let config = common::test_config(&format!("http://{upstream_addr}"));
    let (addr, shutdown) = common::spawn_gateway(config).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/api-proxy?path=/api/candidates"))
        .body("should never reach upstream")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let captured = upstream_rx.recv().await.expect("upstream saw no request");
    assert_eq!(captured.method(), "GET");
    assert_eq!(captured.target(), "/api/candidates");
    assert!(captured.body.is_empty(), "GET must not carry a body upstream");

    shutdown.trigger();
}

#[tokio::test]
async fn post_body_is_forwarded_byte_for_byte() {
    let (upstream_addr, mut upstream_rx) = common::start_mock_upstream(200, None, "ok").await;
    let config = common::test_config(&format!("http://{upstream_addr}"));
    let (addr, shutdown) = common::spawn_gateway(config).await;

    let payload = br#"{"name":"Ada","role":"engineer","score":97}"#;
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api-proxy?path=/api/candidates"))
        .header("content-type", "text/plain")
        .body(payload.to_vec())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let captured = upstream_rx.recv().await.expect("upstream saw no request");
    assert_eq!(captured.method(), "POST");
    assert_eq!(captured.body, payload.to_vec());
    // The outbound content type is always JSON, whatever came in.
    assert_eq!(captured.header("content-type"), Some("application/json"));

    shutdown.trigger();
}

#[tokio::test]
async fn upstream_response_is_mirrored() {
    let (upstream_addr, _rx) =
        common::start_mock_upstream(201, Some("application/json"), r#"{"id":"job-9"}"#).await;
    let config = common::test_config(&format!("http://{upstream_addr}"));
    let (addr, shutdown) = common::spawn_gateway(config).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api-proxy?path=/api/jobs"))
        .body(r#"{"title":"Backend Engineer"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    assert_cors_headers(&response);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(response.text().await.unwrap(), r#"{"id":"job-9"}"#);

    shutdown.trigger();
}

#[tokio::test]
async fn missing_upstream_content_type_defaults_to_json() {
    let (upstream_addr, _rx) = common::start_mock_upstream(200, None, "plain payload").await;
    let config = common::test_config(&format!("http://{upstream_addr}"));
    let (addr, shutdown) = common::spawn_gateway(config).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/api-proxy?path=/api/evaluate"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(response.text().await.unwrap(), "plain payload");

    shutdown.trigger();
}

#[tokio::test]
async fn query_inside_logical_path_reaches_upstream() {
    let (upstream_addr, mut upstream_rx) = common::start_mock_upstream(200, None, "[]").await;
    let config = common::test_config(&format!("http://{upstream_addr}"));
    let (addr, shutdown) = common::spawn_gateway(config).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/api-proxy"))
        .query(&[("path", "/api/candidates?limit=5&sort=score")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let captured = upstream_rx.recv().await.expect("upstream saw no request");
    assert_eq!(captured.target(), "/api/candidates?limit=5&sort=score");

    shutdown.trigger();
}

#[tokio::test]
async fn upstream_failure_is_500_with_cors() {
    let dead_addr = common::unreachable_addr().await;
    let config = common::test_config(&format!("http://{dead_addr}"));
    let (addr, shutdown) = common::spawn_gateway(config).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/api-proxy?path=/api/jobs"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    assert_cors_headers(&response);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(
        body["error"].as_str().is_some_and(|m| !m.is_empty()),
        "500 body must carry the error message, got {body}"
    );

    shutdown.trigger();
}
