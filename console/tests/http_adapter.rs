//! HTTP adapter tests against a local mock server: header attachment,
//! envelope unwrapping, error-message extraction, and the unauthorized
//! circuit breaker.

use admin_console::api::RestAdminApi;
use admin_console::config::ConsoleConfig;
use admin_console::error::ApiError;
use admin_console::http::{BearerCell, HttpClient, UnauthorizedHook};
use admin_console::outcome::RequestOutcome;
use admin_console::providers::{
    AdminApi, ImageAttachment, LoginCredentials, RegistrationForm, UserEdit,
};
use admin_console::services;
use admin_console::state::{ListQuery, UserId};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ConsoleConfig {
    ConsoleConfig::new(server.uri(), "test-key")
}

fn api_for(server: &MockServer, bearer: BearerCell) -> RestAdminApi {
    RestAdminApi::new(HttpClient::new(&config_for(server), bearer))
}

fn user_json(id: &str, first_name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": first_name,
        "last_name": "Wilson",
        "email": "sarah@example.com",
        "is_active": true,
        "is_verify": false,
        "booking_count": 3,
        "review_count": 1,
    })
}

fn credentials() -> LoginCredentials {
    LoginCredentials {
        email: "sarah@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

#[tokio::test]
async fn attaches_api_key_and_bearer_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/list"))
        .and(header("api-key", "test-key"))
        .and(header("authorization", "Bearer tok-123"))
        .and(query_param("search", "wilson"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "ok",
            "data": { "items": [], "total": 0, "page": 2, "page_size": 25 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bearer = BearerCell::new();
    bearer.set("tok-123");
    let api = api_for(&server, bearer);

    let result = api
        .list_users(ListQuery {
            search_text: "wilson".to_string(),
            page: 2,
            page_size: 25,
        })
        .await;

    assert!(matches!(result, Ok(ref page) if page.page == 2));
}

#[tokio::test]
async fn omits_bearer_header_when_signed_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "ok",
            "data": { "token": "tok", "id": "u1", "first_name": "Sarah",
                      "last_name": "Wilson", "email": "sarah@example.com" }
        })))
        .mount(&server)
        .await;

    let api = api_for(&server, BearerCell::new());
    let result = api.login(credentials()).await;
    assert!(result.is_ok());

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].headers.get("authorization").is_none(),
        "no bearer header should be attached while signed out"
    );
}

#[tokio::test]
async fn unwraps_the_envelope_into_the_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "sarah@example.com",
            "password": "hunter2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "data": { "token": "tok-9", "id": "u1", "first_name": "Sarah",
                      "last_name": "Wilson", "email": "sarah@example.com",
                      "is_active": true }
        })))
        .mount(&server)
        .await;

    let api = api_for(&server, BearerCell::new());
    let payload = api.login(credentials()).await;

    match payload {
        Ok(payload) => {
            assert_eq!(payload.token, "tok-9");
            assert_eq!(payload.user.id, UserId::new("u1"));
            assert_eq!(payload.user.first_name, "Sarah");
        },
        Err(e) => unreachable!("login should decode: {e}"),
    }
}

#[tokio::test]
async fn unauthorized_clears_the_bearer_and_fires_the_hook() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/list"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Token expired"
        })))
        .mount(&server)
        .await;

    let fired = Arc::new(AtomicBool::new(false));
    let hook: UnauthorizedHook = {
        let fired = Arc::clone(&fired);
        Arc::new(move || {
            fired.store(true, Ordering::SeqCst);
        })
    };

    let bearer = BearerCell::new();
    bearer.set("expired-tok");
    let http = HttpClient::new(&config_for(&server), bearer.clone()).with_unauthorized_hook(hook);
    let api = RestAdminApi::new(http);

    let result = api
        .list_users(ListQuery {
            search_text: String::new(),
            page: 1,
            page_size: 10,
        })
        .await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert!(bearer.get().is_none(), "credential cleared centrally");
    assert!(fired.load(Ordering::SeqCst), "hook fired exactly on 401");
}

#[tokio::test]
async fn extracts_the_server_message_from_error_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Email already registered"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server, BearerCell::new());
    let outcome = services::register(
        &api,
        RegistrationForm {
            first_name: "Sarah".to_string(),
            last_name: "Wilson".to_string(),
            email: "sarah@example.com".to_string(),
            password: "hunter2".to_string(),
            phone_number: None,
        },
    )
    .await;

    assert_eq!(
        outcome,
        RequestOutcome::Failure {
            error: "Email already registered".to_string()
        }
    );
}

#[tokio::test]
async fn falls_back_to_a_generic_message_for_opaque_errors() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/user/remove"))
        .and(body_json(json!({ "user_id": "u7" })))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = api_for(&server, BearerCell::new());
    let outcome = services::remove_user(&api, UserId::new("u7")).await;

    match outcome {
        RequestOutcome::Failure { error } => {
            assert_eq!(error, admin_console::error::GENERIC_ERROR_MESSAGE);
        },
        RequestOutcome::Success { .. } => unreachable!("500 must not be a success"),
    }
}

#[tokio::test]
async fn edit_user_submits_multipart_with_the_image_attachment() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/user/edit-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "ok",
            "data": user_json("u1", "Sarah")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, BearerCell::new());
    let result = api
        .edit_user(UserEdit {
            user_id: UserId::new("u1"),
            first_name: "Sarah".to_string(),
            last_name: "Wilson".to_string(),
            email: "sarah@example.com".to_string(),
            phone_number: Some("+1 234".to_string()),
            gender: None,
            address: None,
            city: None,
            state: None,
            country: None,
            postal_code: None,
            latitude: Some(37.77),
            longitude: Some(-122.41),
            image: Some(ImageAttachment {
                file_name: "avatar.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            }),
        })
        .await;

    assert!(result.is_ok());

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("multipart/form-data"),
        "user-edit must go out as multipart, got {content_type}"
    );

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("avatar.png"));
    assert!(body.contains("user_id"));
    assert!(body.contains("37.77"));
}

#[tokio::test]
async fn transport_failures_become_transport_errors() {
    // Nothing is listening on this port.
    let config = ConsoleConfig::new("http://127.0.0.1:9", "test-key");
    let api = RestAdminApi::new(HttpClient::new(&config, BearerCell::new()));

    let result = api.forgot_password("sarah@example.com".to_string()).await;
    assert!(matches!(result, Err(ApiError::Transport(_))));

    // And through the service layer, a non-empty message.
    let outcome = services::forgot_password(&api, "sarah@example.com".to_string()).await;
    match outcome {
        RequestOutcome::Failure { error } => assert!(!error.is_empty()),
        RequestOutcome::Success { .. } => unreachable!("transport failure must not succeed"),
    }
}
