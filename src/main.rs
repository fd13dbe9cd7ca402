use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use villager_server::config::database::establish_connection;
use villager_server::config::AppConfig;
use villager_server::event::{run_event_listener, EventPublisher};
use villager_server::state::AppState;
use villager_server::utils::file::LocalFileStorage;
use villager_server::{app, utils::error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "villager_server=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 3. 설정 로드
    let config = AppConfig::from_env()
        .map_err(|e| AppError::InternalError(format!("설정 로드 실패: {}", e)))?;

    // 4. DB 연결 (DB_SCHEMA_UPDATE=true면 스키마 동기화)
    let db = establish_connection(&config.database_url)
        .await
        .map_err(|e| AppError::InternalError(format!("DB 연결 실패: {}", e)))?;

    // 5. 도메인 이벤트 채널 + 리스너 태스크
    let (events, rx) = EventPublisher::channel();
    tokio::spawn(run_event_listener(rx));

    // 6. 파일 저장소
    let storage = Arc::new(LocalFileStorage::new(&config.upload_dir));

    let server_port = config.server_port;
    let state = AppState {
        db,
        config,
        events,
        storage,
    };

    // 7. 서버 실행
    let app = app(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::InternalError(format!("포트 바인딩 실패: {}", e)))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("서버 실행 실패: {}", e)))?;

    Ok(())
}
