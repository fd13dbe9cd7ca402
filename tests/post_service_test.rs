mod common;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use villager_server::domain::post::comment_service::CommentService;
use villager_server::domain::post::dto::{
    CreateCommentRequest, CreatePostRequest, UpdatePostRequest, UploadImage,
};
use villager_server::domain::post::entity::post::{Entity as Post, PostState};
use villager_server::domain::post::entity::post_image::{self, Entity as PostImage};
use villager_server::domain::post::service::PostService;
use villager_server::utils::error::AppError;
use villager_server::utils::page::PageQuery;

fn post_request(category_id: i64, title: &str) -> CreatePostRequest {
    CreatePostRequest {
        category_id,
        title: title.to_string(),
        contents: "동네 소식 공유합니다.".to_string(),
    }
}

fn default_page() -> PageQuery {
    PageQuery {
        page: None,
        size: None,
    }
}

#[tokio::test]
async fn create_post_should_store_images_with_uuid_prefixed_paths() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;
    let category = common::seed_category(&state.db, "자유게시판").await;

    let response = PostService::create_post(
        state.clone(),
        member.member_id,
        post_request(category.category_id, "첫 글"),
        vec![UploadImage {
            file_name: "photo.png".to_string(),
            data: vec![1, 2, 3, 4],
        }],
    )
    .await
    .expect("create failed");

    assert_eq!(response.title, "첫 글");
    assert_eq!(response.view_count, 0);
    assert_eq!(response.images.len(), 1);

    let image = &response.images[0];
    assert_eq!(image.size, 4);
    // 경로는 {uuid}-{원본파일명}
    assert!(image.image_path.ends_with("-photo.png"));
    assert_ne!(image.image_path, "photo.png");

    let rows = PostImage::find()
        .filter(post_image::Column::PostId.eq(response.post_id))
        .all(&state.db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    // 커밋 후 파일도 기록된다
    let written =
        tokio::fs::read(std::path::Path::new(&state.config.upload_dir).join(&image.image_path))
            .await
            .expect("file missing");
    assert_eq!(written, vec![1, 2, 3, 4]);

    tokio::fs::remove_dir_all(&state.config.upload_dir).await.ok();
}

#[tokio::test]
async fn create_post_with_missing_category_should_be_not_found() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;

    let result =
        PostService::create_post(state, member.member_id, post_request(9999, "글"), vec![]).await;

    assert!(matches!(result, Err(AppError::CategoryNotFound(_))));
}

#[tokio::test]
async fn update_by_non_author_should_be_rejected() {
    let (state, _rx) = common::setup_state().await;
    let author = common::seed_member(&state.db, "author@gmail.com", "작성자").await;
    let other = common::seed_member(&state.db, "other@gmail.com", "타인").await;
    let category = common::seed_category(&state.db, "자유게시판").await;

    let post = PostService::create_post(
        state.clone(),
        author.member_id,
        post_request(category.category_id, "원본 제목"),
        vec![],
    )
    .await
    .expect("create failed");

    let result = PostService::update_post(
        state,
        other.member_id,
        post.post_id,
        UpdatePostRequest {
            category_id: None,
            title: Some("바꾼 제목".to_string()),
            contents: None,
        },
    )
    .await;

    assert!(matches!(result, Err(AppError::PostValidNot(_))));
}

#[tokio::test]
async fn delete_should_be_soft_and_hide_from_listing() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;
    let category = common::seed_category(&state.db, "자유게시판").await;

    let post = PostService::create_post(
        state.clone(),
        member.member_id,
        post_request(category.category_id, "삭제될 글"),
        vec![],
    )
    .await
    .expect("create failed");

    PostService::delete_post(state.clone(), member.member_id, post.post_id)
        .await
        .expect("delete failed");

    // 행은 남고 상태만 전환된다
    let saved = Post::find_by_id(post.post_id)
        .one(&state.db)
        .await
        .unwrap()
        .expect("row missing");
    assert_eq!(saved.state, PostState::Deleted);

    let listing = PostService::get_posts(state, default_page())
        .await
        .expect("list failed");
    assert!(listing.content.is_empty());
}

#[tokio::test]
async fn view_count_should_increment_unconditionally() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;
    let category = common::seed_category(&state.db, "자유게시판").await;

    let post = PostService::create_post(
        state.clone(),
        member.member_id,
        post_request(category.category_id, "조회수 글"),
        vec![],
    )
    .await
    .expect("create failed");

    let first = PostService::increment_view(state.clone(), post.post_id)
        .await
        .expect("increment failed");
    let second = PostService::increment_view(state, post.post_id)
        .await
        .expect("increment failed");

    assert_eq!(first.view_count, 1);
    assert_eq!(second.view_count, 2);
}

#[tokio::test]
async fn categories_should_list_in_id_order() {
    let (state, _rx) = common::setup_state().await;
    common::seed_category(&state.db, "자유게시판").await;
    common::seed_category(&state.db, "중고거래").await;

    let categories = PostService::get_categories(state).await.expect("list failed");

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "자유게시판");
    assert_eq!(categories[1].name, "중고거래");
}

#[tokio::test]
async fn comment_on_deleted_post_should_be_not_found() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;
    let category = common::seed_category(&state.db, "자유게시판").await;

    let post = PostService::create_post(
        state.clone(),
        member.member_id,
        post_request(category.category_id, "글"),
        vec![],
    )
    .await
    .expect("create failed");

    PostService::delete_post(state.clone(), member.member_id, post.post_id)
        .await
        .expect("delete failed");

    let result = CommentService::create(
        state,
        member.member_id,
        post.post_id,
        CreateCommentRequest {
            contents: "댓글".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(AppError::PostNotFound(_))));
}

#[tokio::test]
async fn comment_create_should_persist() {
    let (state, _rx) = common::setup_state().await;
    let member = common::seed_member(&state.db, "m@gmail.com", "회원").await;
    let category = common::seed_category(&state.db, "자유게시판").await;

    let post = PostService::create_post(
        state.clone(),
        member.member_id,
        post_request(category.category_id, "글"),
        vec![],
    )
    .await
    .expect("create failed");

    let comment = CommentService::create(
        state,
        member.member_id,
        post.post_id,
        CreateCommentRequest {
            contents: "좋은 글이네요".to_string(),
        },
    )
    .await
    .expect("comment failed");

    assert_eq!(comment.post_id, post.post_id);
    assert_eq!(comment.member_id, member.member_id);
    assert_eq!(comment.contents, "좋은 글이네요");
}
