use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::event::EventPublisher;
use crate::utils::file::FileStorage;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub events: EventPublisher,
    pub storage: Arc<dyn FileStorage>,
}
