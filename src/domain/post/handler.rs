use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use utoipa;
use validator::Validate;

use super::comment_service::CommentService;
use super::dto::{
    CategoryResponse, CommentResponse, CreateCommentRequest, CreatePostRequest, PostListResponse,
    PostResponse, PostViewResponse, UpdatePostRequest, UploadImage,
};
use super::service::PostService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::page::PageQuery;
use crate::utils::BaseResponse;

/// 게시글 작성 API (multipart)
///
/// `data` 파트에 게시글 JSON, `images` 파트에 첨부 이미지를 담아 요청합니다.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    security(("bearer_auth" = [])),
    request_body(content = CreatePostRequest, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "작성 성공", body = BaseResponse<PostResponse>),
        (status = 400, description = "요청 형식 오류", body = ErrorResponse),
        (status = 404, description = "카테고리 없음", body = ErrorResponse)
    ),
    tag = "Post"
)]
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<BaseResponse<PostResponse>>, AppError> {
    let member_id = user.member_id()?;

    // multipart 파트 분리: data(JSON) + images(반복)
    let mut data: Option<CreatePostRequest> = None;
    let mut images: Vec<UploadImage> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("multipart 파싱 실패: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("data") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("data 파트 읽기 실패: {}", e)))?;
                let req = serde_json::from_slice::<CreatePostRequest>(&bytes)
                    .map_err(|e| AppError::JsonParseFailed(e.to_string()))?;
                data = Some(req);
            }
            Some("images") => {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("이미지 파트 읽기 실패: {}", e)))?;
                images.push(UploadImage {
                    file_name,
                    data: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let req =
        data.ok_or_else(|| AppError::BadRequest("data 파트는 필수입니다.".to_string()))?;
    req.validate()?;

    let result = PostService::create_post(state, member_id, req, images).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 게시글 수정 API (작성자만)
#[utoipa::path(
    patch,
    path = "/api/v1/posts/{post_id}",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "게시글 ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "수정 성공", body = BaseResponse<PostResponse>),
        (status = 403, description = "작성자 아님", body = ErrorResponse)
    ),
    tag = "Post"
)]
pub async fn update_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(post_id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<BaseResponse<PostResponse>>, AppError> {
    req.validate()?;
    let member_id = user.member_id()?;

    let result = PostService::update_post(state, member_id, post_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 게시글 삭제 API (작성자만, 소프트 삭제)
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{post_id}",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "게시글 ID")),
    responses(
        (status = 200, description = "삭제 성공"),
        (status = 403, description = "작성자 아님", body = ErrorResponse)
    ),
    tag = "Post"
)]
pub async fn delete_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(post_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let member_id = user.member_id()?;

    PostService::delete_post(state, member_id, post_id).await?;

    Ok(Json(BaseResponse::ok("게시글이 삭제되었습니다.")))
}

/// 게시글 조회수 증가 API
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/views",
    params(("post_id" = i64, Path, description = "게시글 ID")),
    responses(
        (status = 200, description = "증가 성공", body = BaseResponse<PostViewResponse>),
        (status = 404, description = "게시글 없음", body = ErrorResponse)
    ),
    tag = "Post"
)]
pub async fn increment_post_view(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<BaseResponse<PostViewResponse>>, AppError> {
    let result = PostService::increment_view(state, post_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 게시글 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(
        ("page" = Option<u64>, Query, description = "페이지 번호 (0부터)"),
        ("size" = Option<u64>, Query, description = "페이지 크기")
    ),
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<PostListResponse>)
    ),
    tag = "Post"
)]
pub async fn get_posts(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<BaseResponse<PostListResponse>>, AppError> {
    let result = PostService::get_posts(state, query).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 카테고리 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<Vec<CategoryResponse>>)
    ),
    tag = "Post"
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<CategoryResponse>>>, AppError> {
    let result = PostService::get_categories(state).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 게시글 댓글 작성 API
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "게시글 ID")),
    request_body = CreateCommentRequest,
    responses(
        (status = 200, description = "작성 성공", body = BaseResponse<CommentResponse>),
        (status = 404, description = "게시글 없음", body = ErrorResponse)
    ),
    tag = "Post"
)]
pub async fn create_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(post_id): Path<i64>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<BaseResponse<CommentResponse>>, AppError> {
    req.validate()?;
    let member_id = user.member_id()?;

    let result = CommentService::create(state, member_id, post_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}
