//! End-to-end forwarding semantics through a live proxy instance.

use front_proxy::config::{ProxyConfig, ResponseMode};

mod common;

fn config_for(backend: std::net::SocketAddr) -> ProxyConfig {
    let mut config = ProxyConfig::new(format!("http://{}", backend));
    config.backend_prefix = "/shop/api".to_string();
    config
}

#[tokio::test]
async fn forwards_path_query_and_credentials() {
    let response = common::http_response("200 OK", &[("X-Backend", "yes")], "ok");
    let (backend_addr, received) = common::start_recording_backend(response).await;
    let (proxy_addr, shutdown) = common::spawn_proxy(config_for(backend_addr)).await;

    let res = common::test_client()
        .get(format!("http://{}/proxy/products?limit=5", proxy_addr))
        .header("cookie", "session=abc")
        .header("authorization", "Bearer tok")
        .send()
        .await
        .expect("proxy unreachable");

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert_eq!(res.headers().get("x-backend").unwrap(), "yes");
    assert_eq!(res.text().await.unwrap(), "ok");

    let recorded = received.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, "GET");
    assert_eq!(recorded[0].target, "/shop/api/products?limit=5");
    assert_eq!(recorded[0].header("cookie"), Some("session=abc"));
    assert_eq!(recorded[0].header("authorization"), Some("Bearer tok"));

    shutdown.trigger();
}

#[tokio::test]
async fn exact_prefix_forwards_to_backend_prefix_without_trailing_slash() {
    let response = common::http_response("200 OK", &[], "root");
    let (backend_addr, received) = common::start_recording_backend(response).await;
    let (proxy_addr, shutdown) = common::spawn_proxy(config_for(backend_addr)).await;

    let res = common::test_client()
        .get(format!("http://{}/proxy", proxy_addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let recorded = received.lock().unwrap();
    assert_eq!(recorded[0].target, "/shop/api");

    shutdown.trigger();
}

#[tokio::test]
async fn post_body_and_content_type_are_forwarded() {
    let response = common::http_response("201 Created", &[], "created");
    let (backend_addr, received) = common::start_recording_backend(response).await;
    let (proxy_addr, shutdown) = common::spawn_proxy(config_for(backend_addr)).await;

    let res = common::test_client()
        .post(format!("http://{}/proxy/products", proxy_addr))
        .header("content-type", "application/json")
        .body(r#"{"name":"soap"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 201);
    let recorded = received.lock().unwrap();
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].body, r#"{"name":"soap"}"#);
    assert_eq!(recorded[0].header("content-type"), Some("application/json"));

    shutdown.trigger();
}

#[tokio::test]
async fn get_request_body_is_never_forwarded() {
    let response = common::http_response("200 OK", &[], "ok");
    let (backend_addr, received) = common::start_recording_backend(response).await;
    let (proxy_addr, shutdown) = common::spawn_proxy(config_for(backend_addr)).await;

    let res = common::test_client()
        .get(format!("http://{}/proxy/products", proxy_addr))
        .body("should be dropped")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let recorded = received.lock().unwrap();
    assert_eq!(recorded[0].body, "");

    shutdown.trigger();
}

#[tokio::test]
async fn set_cookie_is_rewritten_for_cross_site_use() {
    let response = common::http_response(
        "200 OK",
        &[("Set-Cookie", "session=abc; SameSite=Lax; Secure")],
        "ok",
    );
    let (backend_addr, _received) = common::start_recording_backend(response).await;
    let (proxy_addr, shutdown) = common::spawn_proxy(config_for(backend_addr)).await;

    let res = common::test_client()
        .get(format!("http://{}/proxy/login", proxy_addr))
        .send()
        .await
        .unwrap();

    let cookie = res
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(cookie, "session=abc; HttpOnly; Secure; SameSite=None; Path=/");

    shutdown.trigger();
}

#[tokio::test]
async fn backend_redirects_are_relayed_not_followed() {
    let response = common::http_response(
        "302 Found",
        &[("Location", "https://elsewhere.example.com/login")],
        "",
    );
    let (backend_addr, received) = common::start_recording_backend(response).await;
    let (proxy_addr, shutdown) = common::spawn_proxy(config_for(backend_addr)).await;

    let res = common::test_client()
        .get(format!("http://{}/proxy/account", proxy_addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 302);
    assert_eq!(
        res.headers().get("location").unwrap(),
        "https://elsewhere.example.com/login"
    );
    // One call: the proxy relayed the redirect instead of chasing it.
    assert_eq!(received.lock().unwrap().len(), 1);

    shutdown.trigger();
}

#[tokio::test]
async fn json_envelope_mode_wraps_objects() {
    let response = common::http_response(
        "200 OK",
        &[("Content-Type", "application/json")],
        r#"{"id":1}"#,
    );
    let (backend_addr, _received) = common::start_recording_backend(response).await;
    let mut config = config_for(backend_addr);
    config.response_mode = ResponseMode::JsonEnvelope;
    let (proxy_addr, shutdown) = common::spawn_proxy(config).await;

    let res = common::test_client()
        .get(format!("http://{}/proxy/products/1", proxy_addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(res.text().await.unwrap(), r#"[{"id":1}]"#);

    shutdown.trigger();
}

#[tokio::test]
async fn json_envelope_mode_wraps_non_json_text() {
    let response = common::http_response("200 OK", &[("Content-Type", "text/plain")], "pong");
    let (backend_addr, _received) = common::start_recording_backend(response).await;
    let mut config = config_for(backend_addr);
    config.response_mode = ResponseMode::JsonEnvelope;
    let (proxy_addr, shutdown) = common::spawn_proxy(config).await;

    let res = common::test_client()
        .get(format!("http://{}/proxy/ping", proxy_addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.text().await.unwrap(), r#"["pong"]"#);

    shutdown.trigger();
}
