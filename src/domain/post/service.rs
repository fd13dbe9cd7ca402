use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use super::dto::{
    CategoryResponse, CreatePostRequest, PostListResponse, PostResponse, PostSummaryResponse,
    PostViewResponse, UpdatePostRequest, UploadImage,
};
use super::entity::category::{self, Entity as Category};
use super::entity::post::{self, Entity as Post, PostState};
use super::entity::post_image::{self, Entity as PostImage};
use crate::domain::member::entity::member::Entity as Member;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::file::StoredFile;
use crate::utils::page::PageQuery;

pub struct PostService;

impl PostService {
    /// 게시글 작성 (이미지 첨부 포함)
    ///
    /// 이미지 경로는 `{uuid}-{원본파일명}`으로 생성합니다.
    /// DB 저장 후 파일을 기록하며, 파일 기록 실패 시 이미 커밋된
    /// 행은 되돌리지 않습니다.
    pub async fn create_post(
        state: AppState,
        member_id: i64,
        req: CreatePostRequest,
        images: Vec<UploadImage>,
    ) -> Result<PostResponse, AppError> {
        // 1. 작성 회원 확인
        Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        // 2. 카테고리 확인
        Category::find_by_id(req.category_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::CategoryNotFound("카테고리를 찾을 수 없습니다.".to_string())
            })?;

        // 3. 이미지 경로 생성
        let mut stored_files = Vec::with_capacity(images.len());
        let mut image_rows = Vec::with_capacity(images.len());
        for image in images {
            let path = format!("{}-{}", Uuid::new_v4(), image.file_name);
            image_rows.push((path.clone(), image.data.len() as i64));
            stored_files.push(StoredFile {
                path,
                data: image.data,
            });
        }

        // 4. 트랜잭션으로 게시글 + 이미지 행 저장
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let now = Utc::now().naive_utc();
        let new_post = post::ActiveModel {
            member_id: Set(member_id),
            category_id: Set(req.category_id),
            title: Set(req.title),
            contents: Set(req.contents),
            state: Set(PostState::Normal),
            view_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = new_post
            .insert(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let mut saved_images = Vec::with_capacity(image_rows.len());
        for (path, size) in image_rows {
            let row = post_image::ActiveModel {
                post_id: Set(saved.post_id),
                size: Set(size),
                image_path: Set(path),
                ..Default::default()
            };
            let saved_image = row
                .insert(&txn)
                .await
                .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;
            saved_images.push(saved_image);
        }

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(
            post_id = saved.post_id,
            member_id = member_id,
            images = saved_images.len(),
            "게시글 작성 완료"
        );

        // 5. 커밋 후 파일 기록
        if !stored_files.is_empty() {
            state.storage.store(stored_files).await?;
        }

        Ok(PostResponse::assemble(saved, saved_images))
    }

    /// 게시글 수정 (작성자만)
    pub async fn update_post(
        state: AppState,
        member_id: i64,
        post_id: i64,
        req: UpdatePostRequest,
    ) -> Result<PostResponse, AppError> {
        // 1. 작성자 본인 게시글인지 확인 (id + member 복합 조회)
        let found = Self::find_own_post(&state, member_id, post_id).await?;

        // 2. 카테고리 변경 시 존재 확인
        if let Some(category_id) = req.category_id {
            Category::find_by_id(category_id)
                .one(&state.db)
                .await
                .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
                .ok_or_else(|| {
                    AppError::CategoryNotFound("카테고리를 찾을 수 없습니다.".to_string())
                })?;
        }

        // 3. 수정
        let mut active: post::ActiveModel = found.into();
        if let Some(category_id) = req.category_id {
            active.category_id = Set(category_id);
        }
        if let Some(title) = req.title {
            active.title = Set(title);
        }
        if let Some(contents) = req.contents {
            active.contents = Set(contents);
        }
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let images = PostImage::find()
            .filter(post_image::Column::PostId.eq(post_id))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(post_id = post_id, "게시글 수정 완료");

        Ok(PostResponse::assemble(updated, images))
    }

    /// 게시글 삭제 (작성자만, 상태 전환)
    pub async fn delete_post(
        state: AppState,
        member_id: i64,
        post_id: i64,
    ) -> Result<(), AppError> {
        // 1. 작성자 본인 게시글인지 확인
        let found = Self::find_own_post(&state, member_id, post_id).await?;

        // 2. DELETED 상태로 전환 (행은 유지)
        let mut active: post::ActiveModel = found.into();
        active.state = Set(PostState::Deleted);
        active.updated_at = Set(Utc::now().naive_utc());

        active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(post_id = post_id, member_id = member_id, "게시글 삭제 완료");

        Ok(())
    }

    /// 조회수 증가
    pub async fn increment_view(
        state: AppState,
        post_id: i64,
    ) -> Result<PostViewResponse, AppError> {
        let found = Post::find_by_id(post_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::PostNotFound("게시글을 찾을 수 없습니다.".to_string()))?;

        let view_count = found.view_count + 1;
        let mut active: post::ActiveModel = found.into();
        active.view_count = Set(view_count);

        let updated = active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        Ok(PostViewResponse {
            post_id: updated.post_id,
            view_count: updated.view_count,
        })
    }

    /// 게시글 목록 조회 (삭제되지 않은 글만, 페이지네이션)
    pub async fn get_posts(
        state: AppState,
        query: PageQuery,
    ) -> Result<PostListResponse, AppError> {
        let page = query.page();
        let size = query.size();

        let paginator = Post::find()
            .filter(post::Column::State.eq(PostState::Normal))
            .order_by_desc(post::Column::PostId)
            .paginate(&state.db, size);

        let total_elements = paginator
            .num_items()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;
        let total_pages = paginator
            .num_pages()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let content = paginator
            .fetch_page(page)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .into_iter()
            .map(PostSummaryResponse::from)
            .collect();

        Ok(PostListResponse {
            content,
            page,
            size,
            total_elements,
            total_pages,
        })
    }

    /// 카테고리 목록 조회
    pub async fn get_categories(state: AppState) -> Result<Vec<CategoryResponse>, AppError> {
        let categories = Category::find()
            .order_by_asc(category::Column::CategoryId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// 작성자 본인 게시글 복합 조회 (없거나 남의 글이면 POST4031)
    async fn find_own_post(
        state: &AppState,
        member_id: i64,
        post_id: i64,
    ) -> Result<post::Model, AppError> {
        Post::find()
            .filter(post::Column::PostId.eq(post_id))
            .filter(post::Column::MemberId.eq(member_id))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::PostValidNot("본인이 작성한 게시글이 아닙니다.".to_string())
            })
    }
}
