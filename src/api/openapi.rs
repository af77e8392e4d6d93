use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, RefreshTokenRequestDto,
    RefreshTokenResponseBody, RegisterUserRequest, RegisterUserResponse, RegisteredUser,
};
use crate::chat::adapter::incoming::web::routes::{
    ChatResponse, CreateGroupChatRequest, MessageResponse, SendMessageRequest,
};
use crate::comment::adapter::incoming::web::routes::{AddCommentRequest, CommentResponse};
use crate::community::adapter::incoming::web::routes::{
    CommunityPostRequest, CommunityResponse, CreateCommunityRequest, UpdateCommunityRequest,
};
use crate::friendship::adapter::incoming::web::routes::FriendshipResponse;
use crate::post::adapter::incoming::web::routes::{
    CreatePostRequest, PostResponse, UpdatePostRequest,
};
use crate::role::adapter::incoming::web::routes::{
    CreateRoleRequest, RoleAssignmentRequest, RoleResponse,
};
use crate::user::adapter::incoming::web::routes::{UpdateProfileRequest, UserProfileResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Network API",
        version = "1.0.0",
        description = "Users, friendships, chats, communities, posts and comments"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,

        // User endpoints
        crate::user::adapter::incoming::web::routes::get_me_handler,
        crate::user::adapter::incoming::web::routes::update_me_handler,
        crate::user::adapter::incoming::web::routes::search_users_handler,
        crate::user::adapter::incoming::web::routes::get_user_handler,

        // Role endpoints
        crate::role::adapter::incoming::web::routes::create_role_handler,
        crate::role::adapter::incoming::web::routes::list_roles_handler,
        crate::role::adapter::incoming::web::routes::get_role_by_name_handler,
        crate::role::adapter::incoming::web::routes::get_role_handler,
        crate::role::adapter::incoming::web::routes::delete_role_handler,
        crate::role::adapter::incoming::web::routes::assign_role_handler,
        crate::role::adapter::incoming::web::routes::remove_role_handler,

        // Friendship endpoints
        crate::friendship::adapter::incoming::web::routes::send_friend_request_handler,
        crate::friendship::adapter::incoming::web::routes::accept_friend_request_handler,
        crate::friendship::adapter::incoming::web::routes::decline_friend_request_handler,
        crate::friendship::adapter::incoming::web::routes::get_pending_requests_handler,
        crate::friendship::adapter::incoming::web::routes::get_friends_handler,
        crate::friendship::adapter::incoming::web::routes::remove_friend_handler,

        // Chat endpoints
        crate::chat::adapter::incoming::web::routes::create_private_chat_handler,
        crate::chat::adapter::incoming::web::routes::create_group_chat_handler,
        crate::chat::adapter::incoming::web::routes::get_user_chats_handler,
        crate::chat::adapter::incoming::web::routes::delete_chat_handler,
        crate::chat::adapter::incoming::web::routes::send_message_handler,
        crate::chat::adapter::incoming::web::routes::get_message_handler,
        crate::chat::adapter::incoming::web::routes::get_user_messages_handler,
        crate::chat::adapter::incoming::web::routes::get_messages_between_handler,
        crate::chat::adapter::incoming::web::routes::delete_message_handler,

        // Community endpoints
        crate::community::adapter::incoming::web::routes::create_community_handler,
        crate::community::adapter::incoming::web::routes::get_all_communities_handler,
        crate::community::adapter::incoming::web::routes::get_user_communities_handler,
        crate::community::adapter::incoming::web::routes::update_community_handler,
        crate::community::adapter::incoming::web::routes::delete_community_handler,
        crate::community::adapter::incoming::web::routes::join_community_handler,
        crate::community::adapter::incoming::web::routes::leave_community_handler,
        crate::community::adapter::incoming::web::routes::get_community_members_handler,
        crate::community::adapter::incoming::web::routes::create_community_post_handler,
        crate::community::adapter::incoming::web::routes::get_community_posts_handler,

        // Post endpoints
        crate::post::adapter::incoming::web::routes::create_post_handler,
        crate::post::adapter::incoming::web::routes::get_all_posts_handler,
        crate::post::adapter::incoming::web::routes::get_my_posts_handler,
        crate::post::adapter::incoming::web::routes::get_user_posts_handler,
        crate::post::adapter::incoming::web::routes::get_post_handler,
        crate::post::adapter::incoming::web::routes::update_post_handler,
        crate::post::adapter::incoming::web::routes::delete_post_handler,

        // Comment endpoints
        crate::comment::adapter::incoming::web::routes::add_comment_handler,
        crate::comment::adapter::incoming::web::routes::get_comments_handler,
        crate::comment::adapter::incoming::web::routes::delete_comment_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            RegisterUserRequest,
            RegisterUserResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,

            UpdateProfileRequest,
            UserProfileResponse,

            CreateRoleRequest,
            RoleAssignmentRequest,
            RoleResponse,

            FriendshipResponse,

            CreateGroupChatRequest,
            SendMessageRequest,
            ChatResponse,
            MessageResponse,

            CreateCommunityRequest,
            UpdateCommunityRequest,
            CommunityPostRequest,
            CommunityResponse,

            CreatePostRequest,
            UpdatePostRequest,
            PostResponse,

            AddCommentRequest,
            CommentResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "users", description = "User profiles and search"),
        (name = "roles", description = "Role management and assignment"),
        (name = "friendships", description = "Friend requests and friend lists"),
        (name = "chats", description = "Private and group chats"),
        (name = "messages", description = "Chat messages"),
        (name = "communities", description = "Communities, membership and community posts"),
        (name = "posts", description = "Posts"),
        (name = "comments", description = "Comments on posts"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_module() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/auth/register",
            "/api/auth/login",
            "/api/users/me",
            "/api/users/{id}",
            "/api/roles/assign",
            "/api/friendships/{id}/accept",
            "/api/chats/private/{user_id}",
            "/api/messages/between/{user_id}",
            "/api/communities/{id}/posts",
            "/api/posts/{id}",
            "/api/posts/{post_id}/comments/{comment_id}",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn shared_paths_carry_every_method() {
        let doc = ApiDoc::openapi();
        let post = &doc.paths.paths["/api/posts/{id}"];

        assert!(post.get.is_some());
        assert!(post.put.is_some());
        assert!(post.delete.is_some());

        let community_posts = &doc.paths.paths["/api/communities/{id}/posts"];
        assert!(community_posts.get.is_some());
        assert!(community_posts.post.is_some());
    }

    #[test]
    fn response_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;

        for name in ["PostResponse", "ChatResponse", "CommunityResponse", "FriendshipResponse"] {
            assert!(schemas.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
