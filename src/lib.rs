pub mod config;
pub mod domain;
pub mod event;
pub mod state;
pub mod utils;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::health::handler::health_check,
        domain::auth::handler::signup,
        domain::auth::handler::login,
        domain::auth::handler::social_login,
        domain::member::handler::get_my_info,
        domain::member::handler::update_my_info,
        domain::member::handler::update_password,
        domain::member::handler::add_town,
        domain::member::handler::get_towns,
        domain::member::handler::remove_town,
        domain::party::handler::create_party,
        domain::party::handler::get_party,
        domain::party::handler::update_party,
        domain::party::handler::delete_party,
        domain::party::handler::apply_party,
        domain::party::handler::get_party_applies,
        domain::party::handler::accept_party_apply,
        domain::party::handler::toggle_party_like,
        domain::party::handler::create_party_comment,
        domain::party::handler::delete_party_comment,
        domain::post::handler::create_post,
        domain::post::handler::update_post,
        domain::post::handler::delete_post,
        domain::post::handler::increment_post_view,
        domain::post::handler::get_posts,
        domain::post::handler::get_categories,
        domain::post::handler::create_comment,
    ),
    components(
        schemas(
            domain::health::dto::HealthResponse,
            domain::auth::dto::SignupRequest,
            domain::auth::dto::SignupResponse,
            domain::auth::dto::LoginRequest,
            domain::auth::dto::LoginResponse,
            domain::auth::dto::SocialLoginRequest,
            domain::auth::dto::SocialLoginResponse,
            domain::auth::provider::SocialProvider,
            domain::member::dto::MemberInfoResponse,
            domain::member::dto::UpdateMemberInfoRequest,
            domain::member::dto::UpdatePasswordRequest,
            domain::member::dto::AddMemberTownRequest,
            domain::member::dto::MemberTownResponse,
            domain::party::dto::CreatePartyRequest,
            domain::party::dto::UpdatePartyRequest,
            domain::party::dto::PartyResponse,
            domain::party::dto::PartyCommentResponse,
            domain::party::dto::PartyMemberResponse,
            domain::party::dto::PartyApplyResponse,
            domain::party::dto::PartyApplyListResponse,
            domain::party::dto::PartyLikeResponse,
            domain::party::dto::CreatePartyCommentRequest,
            domain::party::entity::party::PartyState,
            domain::post::dto::CreatePostRequest,
            domain::post::dto::UpdatePostRequest,
            domain::post::dto::PostResponse,
            domain::post::dto::PostImageResponse,
            domain::post::dto::PostSummaryResponse,
            domain::post::dto::PostListResponse,
            domain::post::dto::PostViewResponse,
            domain::post::dto::CategoryResponse,
            domain::post::dto::CreateCommentRequest,
            domain::post::dto::CommentResponse,
            domain::post::entity::post::PostState,
            utils::response::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "서버 상태 확인 API"),
        (name = "Auth", description = "회원가입/로그인 API"),
        (name = "Member", description = "회원 정보/동네 API"),
        (name = "Party", description = "모임 API"),
        (name = "PartyApply", description = "모임 가입 신청 API"),
        (name = "PartyLike", description = "관심 모임 API"),
        (name = "PartyComment", description = "모임 댓글 API"),
        (name = "Post", description = "게시판 API")
    )
)]
pub struct ApiDoc;

/// 전체 라우터 구성
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(domain::health::handler::health_check))
        // 인증
        .route("/api/v1/auth/signup", post(domain::auth::handler::signup))
        .route("/api/v1/auth/login", post(domain::auth::handler::login))
        .route(
            "/api/v1/auth/login/social",
            post(domain::auth::handler::social_login),
        )
        // 회원
        .route(
            "/api/v1/members/me",
            get(domain::member::handler::get_my_info).patch(domain::member::handler::update_my_info),
        )
        .route(
            "/api/v1/members/me/password",
            patch(domain::member::handler::update_password),
        )
        .route(
            "/api/v1/members/towns",
            post(domain::member::handler::add_town).get(domain::member::handler::get_towns),
        )
        .route(
            "/api/v1/members/towns/:member_town_id",
            delete(domain::member::handler::remove_town),
        )
        // 모임
        .route("/api/v1/parties", post(domain::party::handler::create_party))
        .route(
            "/api/v1/parties/:party_id",
            get(domain::party::handler::get_party)
                .patch(domain::party::handler::update_party)
                .delete(domain::party::handler::delete_party),
        )
        .route(
            "/api/v1/parties/:party_id/apply",
            post(domain::party::handler::apply_party)
                .get(domain::party::handler::get_party_applies),
        )
        .route(
            "/api/v1/parties/:party_id/apply/:target_member_id",
            patch(domain::party::handler::accept_party_apply),
        )
        .route(
            "/api/v1/parties/:party_id/likes",
            post(domain::party::handler::toggle_party_like),
        )
        .route(
            "/api/v1/parties/:party_id/comments",
            post(domain::party::handler::create_party_comment),
        )
        .route(
            "/api/v1/parties/comments/:party_comment_id",
            delete(domain::party::handler::delete_party_comment),
        )
        // 게시판
        .route(
            "/api/v1/posts",
            post(domain::post::handler::create_post).get(domain::post::handler::get_posts),
        )
        .route(
            "/api/v1/posts/:post_id",
            patch(domain::post::handler::update_post).delete(domain::post::handler::delete_post),
        )
        .route(
            "/api/v1/posts/:post_id/views",
            post(domain::post::handler::increment_post_view),
        )
        .route(
            "/api/v1/posts/:post_id/comments",
            post(domain::post::handler::create_comment),
        )
        .route(
            "/api/v1/categories",
            get(domain::post::handler::get_categories),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
