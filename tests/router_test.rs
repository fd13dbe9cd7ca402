/// 라우터 통합 테스트
///
/// 실제 라우터를 인메모리 SQLite 상태로 구성해 요청/응답 계약을 검증합니다.
mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use villager_server::app;
use villager_server::utils::jwt::encode_token;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read failed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not json")
}

#[tokio::test]
async fn health_should_report_db_up() {
    let (state, _rx) = common::setup_state().await;
    let app = app(state);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["isSuccess"], json!(true));
    assert_eq!(body["result"]["database"], json!("up"));
}

#[tokio::test]
async fn protected_route_without_token_should_be_unauthorized() {
    let (state, _rx) = common::setup_state().await;
    let app = app(state);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/v1/members/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["isSuccess"], json!(false));
    assert_eq!(body["code"], json!("AUTH4001"));
}

#[tokio::test]
async fn protected_route_with_bearer_token_should_succeed() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;
    let token = encode_token(
        member.member_id.to_string(),
        &state.config.jwt_secret,
        3600,
    )
    .expect("token failed");
    let app = app(state);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/v1/members/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["result"]["nickname"], json!("회원"));
    assert_eq!(body["result"]["memberId"], json!(member.member_id));
}

#[tokio::test]
async fn cookie_token_should_also_authenticate() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;
    let token = encode_token(
        member.member_id.to_string(),
        &state.config.jwt_secret,
        3600,
    )
    .expect("token failed");
    let app = app(state);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/v1/members/me")
                .header(header::COOKIE, format!("access_token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn signup_validation_error_should_render_common400() {
    let (state, _rx) = common::setup_state().await;
    let app = app(state);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/auth/signup")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "email": "not-an-email",
                        "nickname": "회원",
                        "password": "password123"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["isSuccess"], json!(false));
    assert_eq!(body["code"], json!("COMMON400"));
}

#[tokio::test]
async fn login_should_set_access_token_cookie() {
    let (state, _rx) = common::setup_state().await;
    common::seed_member(&state.db, "login@gmail.com", "회원").await;
    let app = app(state);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "email": "login@gmail.com",
                        "password": "password123"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("cookie missing")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("access_token="));
    assert!(set_cookie.contains("HttpOnly"));

    let body = body_json(response).await;
    assert_eq!(body["isSuccess"], json!(true));
    assert!(body["result"]["accessToken"].is_string());
}
