mod common;

use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use villager_server::domain::auth::provider::{ProviderUser, SocialProvider};
use villager_server::domain::auth::service::AuthService;
use villager_server::domain::member::entity::member::Entity as Member;
use villager_server::utils::error::AppError;
use villager_server::utils::jwt::decode_access_token;

#[tokio::test]
async fn first_social_login_should_auto_register_member() {
    let (state, _rx) = common::setup_state().await;

    let provider_user = ProviderUser::from_attributes(
        SocialProvider::Kakao,
        json!({ "id": 12345, "kakao_account": { "email": "social@kakao.com" } }),
    );

    let response = AuthService::login_with_provider_user(state.clone(), provider_user)
        .await
        .expect("social login failed");

    assert!(response.is_new_member);
    assert_eq!(response.nickname, "social");

    let saved = Member::find_by_id(response.member_id)
        .one(&state.db)
        .await
        .unwrap()
        .expect("member missing");

    assert_eq!(saved.email, "social@kakao.com");
    assert!(saved.is_certificated);
    assert_eq!(saved.role, "ROLE_USER");
    // 대체 비밀번호는 평문 UUID가 아닌 bcrypt 해시로 저장된다
    assert!(saved.encoded_password.starts_with("$2"));
}

#[tokio::test]
async fn second_social_login_should_reuse_existing_member() {
    let (state, _rx) = common::setup_state().await;

    let attributes = json!({ "email": "google@gmail.com" });

    let first = AuthService::login_with_provider_user(
        state.clone(),
        ProviderUser::from_attributes(SocialProvider::Google, attributes.clone()),
    )
    .await
    .expect("first login failed");

    let second = AuthService::login_with_provider_user(
        state.clone(),
        ProviderUser::from_attributes(SocialProvider::Google, attributes),
    )
    .await
    .expect("second login failed");

    assert!(first.is_new_member);
    assert!(!second.is_new_member);
    assert_eq!(first.member_id, second.member_id);

    let count = Member::find().count(&state.db).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn social_login_token_should_decode_to_member_id() {
    let (state, _rx) = common::setup_state().await;

    let response = AuthService::login_with_provider_user(
        state.clone(),
        ProviderUser::from_attributes(
            SocialProvider::Naver,
            json!({ "response": { "email": "naver@naver.com" } }),
        ),
    )
    .await
    .expect("social login failed");

    let claims = decode_access_token(&response.access_token, &state.config.jwt_secret)
        .expect("token decode failed");

    assert_eq!(claims.sub, response.member_id.to_string());
}

#[tokio::test]
async fn social_login_without_email_should_be_unauthorized() {
    let (state, _rx) = common::setup_state().await;

    let result = AuthService::login_with_provider_user(
        state.clone(),
        ProviderUser::from_attributes(SocialProvider::Kakao, json!({ "id": 1 })),
    )
    .await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));

    let count = Member::find().count(&state.db).await.unwrap();
    assert_eq!(count, 0);
}
