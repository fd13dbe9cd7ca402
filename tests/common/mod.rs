#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use tokio::sync::mpsc::UnboundedReceiver;

use chrono::NaiveDate;
use villager_server::config::database::create_tables;
use villager_server::config::AppConfig;
use villager_server::domain::member::entity::member;
use villager_server::domain::party::dto::CreatePartyRequest;
use villager_server::domain::post::entity::category;
use villager_server::domain::town::entity::town;
use villager_server::event::{DomainEvent, EventPublisher};
use villager_server::state::AppState;
use villager_server::utils::file::LocalFileStorage;

/// 인메모리 SQLite 기반 테스트 상태 생성
///
/// 이벤트 수신단을 함께 반환하므로 이벤트 발행 여부도 검증할 수 있습니다.
pub async fn setup_state() -> (AppState, UnboundedReceiver<DomainEvent>) {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");
    create_tables(&db).await.expect("failed to create tables");

    let (events, rx) = EventPublisher::channel();

    let upload_dir = std::env::temp_dir()
        .join(format!("villager-test-{}", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .to_string();

    let config = AppConfig {
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test_secret".to_string(),
        jwt_expiration: 3600,
        upload_dir: upload_dir.clone(),
        kakao_user_info_url: "http://localhost/kakao".to_string(),
        google_user_info_url: "http://localhost/google".to_string(),
        naver_user_info_url: "http://localhost/naver".to_string(),
    };

    let state = AppState {
        db,
        config,
        events,
        storage: Arc::new(LocalFileStorage::new(upload_dir)),
    };

    (state, rx)
}

/// 테스트 회원 생성 (비밀번호는 낮은 비용으로 해시)
pub async fn seed_member(db: &DatabaseConnection, email: &str, nickname: &str) -> member::Model {
    let now = Utc::now().naive_utc();
    member::ActiveModel {
        email: Set(email.to_string()),
        encoded_password: Set(bcrypt::hash("password123", 4).expect("hash failed")),
        nickname: Set(nickname.to_string()),
        manner_point: Set(0),
        role: Set("ROLE_USER".to_string()),
        is_certificated: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed member")
}

/// 테스트 동네 생성
pub async fn seed_town(db: &DatabaseConnection) -> town::Model {
    town::ActiveModel {
        city: Set("서울특별시".to_string()),
        town: Set("마포구".to_string()),
        village: Set("공덕동".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed town")
}

/// 모임 생성 요청 샘플
pub fn party_request(name: &str) -> CreatePartyRequest {
    CreatePartyRequest {
        party_name: name.to_string(),
        score: 50,
        start_dt: NaiveDate::from_ymd_opt(2023, 3, 1).expect("valid date"),
        end_dt: NaiveDate::from_ymd_opt(2023, 3, 31).expect("valid date"),
        amount: 10000,
        number_people: 5,
        location: "여의도 한강공원".to_string(),
        latitude: 37.528,
        longitude: 126.933,
        content: "매주 토요일 아침 러닝 모임입니다.".to_string(),
        tags: vec!["#운동".to_string(), "#러닝".to_string()],
    }
}

/// 테스트 카테고리 생성
pub async fn seed_category(db: &DatabaseConnection, name: &str) -> category::Model {
    category::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed category")
}
