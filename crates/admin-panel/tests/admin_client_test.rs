//! HTTP tests for the admin and page clients against a mock server.

mod support;

use std::time::Duration;

use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use admin_panel_lib::clients::{build_http_client, AdminApi, AdminClient, ViewRefresh};
use support::{clients_for, config_for};
use common::{AppError, HttpClientConfig};
use domain::{AdminPasswordChange, UserStatus};

#[tokio::test]
async fn test_change_status_posts_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/change_status"))
        .and(body_string_contains("id=30123456"))
        .and(body_string_contains("new_status=suspendido"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let (admin, _) = clients_for(&server);
    let response = assert_ok!(admin.change_status("30123456", UserStatus::Suspended).await);
    assert!(response.success);
}

#[tokio::test]
async fn test_change_password_reports_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/change_password"))
        .and(body_string_contains("new_password=Valid123%21"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Usuario no encontrado" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (admin, _) = clients_for(&server);
    let err = assert_err!(admin.change_password("99999999", "Valid123!").await);
    assert!(matches!(err, AppError::Remote(ref msg) if msg == "Usuario no encontrado"));
}

#[tokio::test]
async fn test_non_json_failure_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/change_status"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Error</h1>"))
        .mount(&server)
        .await;

    let (admin, _) = clients_for(&server);
    let err = assert_err!(admin.change_status("30123456", UserStatus::Active).await);
    assert_eq!(err.user_message(), "Request failed with status 500");
}

#[tokio::test]
async fn test_change_admin_password_sends_all_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/change_admin_password"))
        .and(body_string_contains("current_password=Password123%21"))
        .and(body_string_contains("confirm_password=Valid123%21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Contraseña de administrador actualizada"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (admin, _) = clients_for(&server);
    let change = AdminPasswordChange {
        current_password: "Password123!".to_string(),
        new_password: "Valid123!".to_string(),
        confirm_password: "Valid123!".to_string(),
    };
    let response = assert_ok!(admin.change_admin_password(&change).await);
    assert_eq!(
        response.message.as_deref(),
        Some("Contraseña de administrador actualizada")
    );
}

#[tokio::test]
async fn test_change_admin_password_rejects_mismatch_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/change_admin_password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;

    let (admin, _) = clients_for(&server);
    let change = AdminPasswordChange {
        current_password: "Password123!".to_string(),
        new_password: "weak".to_string(),
        confirm_password: "Other123!".to_string(),
    };
    let err = assert_err!(admin.change_admin_password(&change).await);
    assert!(err.is_validation());
    assert_eq!(err.user_message(), "Passwords do not match");
}

#[tokio::test]
async fn test_login_session_cookie_is_reused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .and(body_string_contains("password=Password123%21"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", "/admin/dashboard")
                .insert_header("set-cookie", "session=abc; Path=/"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Dashboard</h1>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/change_status"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let (admin, _) = clients_for(&server);
    assert_ok!(admin.login("Password123!").await);
    assert_ok!(admin.change_status("30123456", UserStatus::Active).await);
}

#[tokio::test]
async fn test_login_rejected_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>Contraseña incorrecta</p>"))
        .mount(&server)
        .await;

    let (admin, _) = clients_for(&server);
    let err = assert_err!(admin.login("wrong").await);
    assert_eq!(err.user_message(), "Administrator password rejected");
}

#[tokio::test]
async fn test_login_requires_password() {
    let server = MockServer::start().await;
    let (admin, _) = clients_for(&server);
    let err = assert_err!(admin.login("").await);
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_configured_timeout_surfaces_as_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/change_status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = HttpClientConfig {
        request_timeout_ms: Some(50),
        ..config_for(&server)
    };
    let admin = AdminClient::new(build_http_client(&config).unwrap(), config);
    let err = assert_err!(admin.change_status("30123456", UserStatus::Active).await);
    assert_eq!(err.user_message(), "The server did not answer in time");
}

#[tokio::test]
async fn test_unreachable_server_is_a_remote_error() {
    let config = HttpClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_ms: Some(2000),
    };
    let admin = AdminClient::new(build_http_client(&config).unwrap(), config);
    let err = assert_err!(admin.change_status("30123456", UserStatus::Active).await);
    assert!(matches!(err, AppError::Remote(_)));
}

#[tokio::test]
async fn test_page_refresh_and_submit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<table></table>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("identifier=30123456"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (_, pages) = clients_for(&server);
    assert_ok!(pages.refresh().await);

    let fields = vec![
        ("identifier".to_string(), "30123456".to_string()),
        ("password".to_string(), "Valid123!".to_string()),
    ];
    assert_eq!(assert_ok!(pages.submit("/login", &fields).await), 200);
}
