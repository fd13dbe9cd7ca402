use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::utils::error::AppError;

/// 저장할 파일 하나 (바이트 + 생성된 상대 경로)
#[derive(Debug)]
pub struct StoredFile {
    pub path: String,
    pub data: Vec<u8>,
}

/// 파일 저장소 인터페이스
///
/// DB 트랜잭션과는 별개로 동작합니다. 저장 실패 시 이미 커밋된
/// 게시글 행은 되돌리지 않습니다 (보상 트랜잭션 없음).
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// 파일 목록을 저장소에 기록
    async fn store(&self, files: Vec<StoredFile>) -> Result<(), AppError>;
}

/// 로컬 디스크 파일 저장소
pub struct LocalFileStorage {
    base_dir: PathBuf,
}

impl LocalFileStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, files: Vec<StoredFile>) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| AppError::InternalError(format!("업로드 디렉토리 생성 실패: {}", e)))?;

        for file in files {
            // 경로 조작 방지: 파일명 구성 요소만 사용
            let file_name = Path::new(&file.path)
                .file_name()
                .ok_or_else(|| {
                    AppError::InternalError(format!("잘못된 업로드 경로: {}", file.path))
                })?
                .to_owned();
            let target = self.base_dir.join(file_name);

            if let Err(e) = tokio::fs::write(&target, &file.data).await {
                warn!(path = %target.display(), "file write failed: {}", e);
                return Err(AppError::InternalError(format!(
                    "파일 업로드에 실패했습니다: {}",
                    e
                )));
            }

            info!(path = %target.display(), size = file.data.len(), "file stored");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_should_write_files_under_base_dir() {
        let dir = std::env::temp_dir().join(format!("villager-upload-{}", uuid::Uuid::new_v4()));
        let storage = LocalFileStorage::new(&dir);

        storage
            .store(vec![StoredFile {
                path: "abc-test.png".to_string(),
                data: vec![1, 2, 3],
            }])
            .await
            .expect("store failed");

        let written = tokio::fs::read(dir.join("abc-test.png")).await.unwrap();
        assert_eq!(written, vec![1, 2, 3]);

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[tokio::test]
    async fn store_should_strip_directory_components() {
        let dir = std::env::temp_dir().join(format!("villager-upload-{}", uuid::Uuid::new_v4()));
        let storage = LocalFileStorage::new(&dir);

        storage
            .store(vec![StoredFile {
                path: "../escape.png".to_string(),
                data: vec![7],
            }])
            .await
            .expect("store failed");

        assert!(dir.join("escape.png").exists());

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
