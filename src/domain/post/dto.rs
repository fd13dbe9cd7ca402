use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::category;
use super::entity::comment;
use super::entity::post::{self, PostState};
use super::entity::post_image;

/// 게시글 작성 요청 DTO (multipart의 `data` JSON 파트)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub category_id: i64,

    #[validate(length(min = 1, max = 100, message = "제목은 1~100자 이내로 입력해야 합니다."))]
    pub title: String,

    #[validate(length(min = 1, message = "내용은 필수입니다."))]
    pub contents: String,
}

/// 업로드할 이미지 하나 (multipart의 `images` 파트)
#[derive(Debug)]
pub struct UploadImage {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// 게시글 수정 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub category_id: Option<i64>,
    #[validate(length(min = 1, max = 100, message = "제목은 1~100자 이내로 입력해야 합니다."))]
    pub title: Option<String>,
    pub contents: Option<String>,
}

/// 게시글 이미지 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostImageResponse {
    pub post_image_id: i64,
    pub size: i64,
    pub image_path: String,
}

impl From<post_image::Model> for PostImageResponse {
    fn from(img: post_image::Model) -> Self {
        Self {
            post_image_id: img.post_image_id,
            size: img.size,
            image_path: img.image_path,
        }
    }
}

/// 게시글 상세 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub post_id: i64,
    pub member_id: i64,
    pub category_id: i64,
    pub title: String,
    pub contents: String,
    pub state: PostState,
    pub view_count: i64,
    pub images: Vec<PostImageResponse>,
    pub created_at: NaiveDateTime,
}

impl PostResponse {
    pub fn assemble(post: post::Model, images: Vec<post_image::Model>) -> Self {
        Self {
            post_id: post.post_id,
            member_id: post.member_id,
            category_id: post.category_id,
            title: post.title,
            contents: post.contents,
            state: post.state,
            view_count: post.view_count,
            images: images.into_iter().map(PostImageResponse::from).collect(),
            created_at: post.created_at,
        }
    }
}

/// 게시글 목록 항목 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryResponse {
    pub post_id: i64,
    pub member_id: i64,
    pub category_id: i64,
    pub title: String,
    pub view_count: i64,
    pub created_at: NaiveDateTime,
}

impl From<post::Model> for PostSummaryResponse {
    fn from(p: post::Model) -> Self {
        Self {
            post_id: p.post_id,
            member_id: p.member_id,
            category_id: p.category_id,
            title: p.title,
            view_count: p.view_count,
            created_at: p.created_at,
        }
    }
}

/// 게시글 목록 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub content: Vec<PostSummaryResponse>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// 조회수 증가 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostViewResponse {
    pub post_id: i64,
    pub view_count: i64,
}

/// 카테고리 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_id: i64,
    pub name: String,
}

impl From<category::Model> for CategoryResponse {
    fn from(c: category::Model) -> Self {
        Self {
            category_id: c.category_id,
            name: c.name,
        }
    }
}

/// 게시글 댓글 작성 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 500, message = "댓글은 1~500자 이내로 입력해야 합니다."))]
    pub contents: String,
}

/// 게시글 댓글 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub comment_id: i64,
    pub post_id: i64,
    pub member_id: i64,
    pub contents: String,
    pub created_at: NaiveDateTime,
}

impl From<comment::Model> for CommentResponse {
    fn from(c: comment::Model) -> Self {
        Self {
            comment_id: c.comment_id,
            post_id: c.post_id,
            member_id: c.member_id,
            contents: c.contents,
            created_at: c.created_at,
        }
    }
}
