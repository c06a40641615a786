// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks of the request facade against a mock portal API.

use brook_portal::app::Portal;
use brook_portal::config::Config;
use brook_portal::request::{CODE_LOCAL_ERROR, CODE_NOT_AUTH};
use brook_portal::routes::RouteName;
use brook_portal::service::types::{LoginInfo, ProxyConfig};
use brook_portal::storage::{MemoryStorage, Storage, TOKEN_KEY};
use brook_portal::ui::notifications::ToastKind;
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

fn portal(base_url: String, storage: Arc<MemoryStorage>) -> Portal {
    let mut config = Config::default();
    config.api.base_url = base_url;
    Portal::with_storage(Some("en-US".into()), config, storage).expect("Failed to build portal")
}

fn signed_in() -> Arc<MemoryStorage> {
    let storage = Arc::new(MemoryStorage::new());
    storage.set_item(TOKEN_KEY, "secret-token");
    storage
}

#[tokio::test]
async fn not_auth_clears_token_and_navigates_to_root() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/getProxyConfigs");
            then.status(200)
                .json_body(json!({"code": "NOT_ATH", "message": "login required"}));
        })
        .await;

    let storage = signed_in();
    let portal = portal(server.base_url(), storage.clone());
    assert_eq!(portal.router().current().name, RouteName::Index);

    let response = portal.proxy_config().get_proxy_configs().await;

    mock.assert_async().await;
    assert_eq!(response.code, CODE_NOT_AUTH);
    assert_eq!(storage.get_item(TOKEN_KEY), None);
    // "/" redirects to the index, which the guard turns into the login page.
    assert_eq!(portal.router().current().name, RouteName::Login);
    assert!(portal.toasts().is_empty());
}

#[tokio::test]
async fn failure_code_shows_exactly_one_error_toast() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/addProxyConfigs");
            then.status(200)
                .json_body(json!({"code": "ERR", "message": "bad input"}));
        })
        .await;

    let portal = portal(server.base_url(), signed_in());
    let response = portal
        .proxy_config()
        .add_proxy_config(&ProxyConfig::default())
        .await;

    assert!(!response.success());
    let toasts = portal.toasts().toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind(), ToastKind::Error);
    assert_eq!(toasts[0].message(), "bad input");
}

#[tokio::test]
async fn requests_carry_token_and_timestamps() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/delProxyConfigs")
                .header("Authorization", "secret-token")
                .header("Content-Type", "application/json;charset=UTF-8")
                .header_exists("X-Timestamp")
                .json_body_partial(r#"{"id": 3}"#)
                .matches(|req: &HttpMockRequest| {
                    req.body
                        .as_deref()
                        .and_then(|body| serde_json::from_slice::<Value>(body).ok())
                        .is_some_and(|body| body["_timestamp"].is_i64())
                });
            then.status(200).json_body(json!({"code": "OK", "message": "", "data": null}));
        })
        .await;

    let portal = portal(server.base_url(), signed_in());
    let response = portal.proxy_config().del_proxy_config(3).await;

    mock.assert_async().await;
    assert!(response.success());
    assert!(portal.toasts().is_empty());
    assert!(!portal.progress().is_busy());
}

#[tokio::test]
async fn non_object_bodies_are_sent_unchanged() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/bulk")
                .header("Content-Type", "application/json;charset=UTF-8")
                .json_body(json!([1, 2]));
            then.status(200).json_body(json!({"code": "OK", "message": "", "data": null}));
        })
        .await;

    let portal = portal(server.base_url(), signed_in());
    let response: brook_portal::request::Response<Value> =
        portal.http().post("/api/bulk", &[1, 2]).await;

    mock.assert_async().await;
    assert!(response.success());
}

#[tokio::test]
async fn cancelled_request_releases_busy_indicator() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/getBaseInfo");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({"code": "OK", "message": "", "data": null}));
        })
        .await;

    let portal = portal(server.base_url(), signed_in());
    let mut busy = portal.progress().subscribe();

    let outcome = tokio::time::timeout(
        Duration::from_millis(50),
        portal.base_info().get_base_info(),
    )
    .await;

    assert!(outcome.is_err());
    assert!(busy.has_changed().unwrap_or(false));
    assert!(!*busy.borrow_and_update());
    assert!(!portal.progress().is_busy());
    assert_eq!(portal.progress().in_flight(), 0);
}

#[tokio::test]
async fn successful_login_stores_token() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/login")
                .json_body_partial(r#"{"username": "admin", "password": "pw"}"#);
            then.status(200)
                .json_body(json!({"code": "OK", "message": "", "data": "fresh-token"}));
        })
        .await;

    let storage = Arc::new(MemoryStorage::new());
    let portal = portal(server.base_url(), storage.clone());
    let response = portal
        .login(&LoginInfo {
            username: "admin".into(),
            password: "pw".into(),
        })
        .await;

    assert!(response.success());
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("fresh-token"));
    assert_eq!(portal.router().current().name, RouteName::Index);
}

#[tokio::test]
async fn http_error_status_becomes_local_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/getToken");
            then.status(500).body("boom");
        })
        .await;

    let portal = portal(server.base_url(), signed_in());
    let response = portal.my_setting().get_auth_token().await;

    assert_eq!(response.code, CODE_LOCAL_ERROR);
    assert!(response.data.is_none());
    let toasts = portal.toasts().toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind(), ToastKind::Error);
}

#[tokio::test]
async fn unreachable_server_becomes_local_error() {
    // Nothing listens on the discard port.
    let portal = portal("http://127.0.0.1:9".to_string(), signed_in());
    let response = portal.base_info().get_base_info().await;

    assert_eq!(response.code, CODE_LOCAL_ERROR);
    assert!(!response.success());
    assert_eq!(portal.toasts().len(), 1);
    assert!(portal.is_authenticated());
}

#[tokio::test]
async fn get_requests_carry_cache_buster() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/health").query_param_exists("_t");
            then.status(200).json_body(json!({"code": "OK", "data": {"ok": true}}));
        })
        .await;

    let portal = portal(server.base_url(), signed_in());
    let response: brook_portal::request::Response<serde_json::Value> =
        portal.http().get("/api/health").await;

    mock.assert_async().await;
    assert!(response.success());
    assert_eq!(response.data, Some(json!({"ok": true})));
}

#[test]
fn services_format_without_exposing_storage() {
    let portal = portal("http://127.0.0.1:9".to_string(), signed_in());
    let formatted = format!("{:?}", portal.base_info());

    assert!(formatted.starts_with("BaseInfoApi"));
    assert!(formatted.contains("http://127.0.0.1:9"));
    assert!(!formatted.contains("secret-token"));
}
