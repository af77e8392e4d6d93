mod create_post;
mod delete_post;
mod get_all_posts;
mod get_my_posts;
mod get_post;
mod get_user_posts;
mod post_response;
mod update_post;

pub use create_post::{__path_create_post_handler, create_post_handler, CreatePostRequest};
pub use delete_post::{__path_delete_post_handler, delete_post_handler};
pub use get_all_posts::{__path_get_all_posts_handler, get_all_posts_handler};
pub use get_my_posts::{__path_get_my_posts_handler, get_my_posts_handler};
pub use get_post::{__path_get_post_handler, get_post_handler};
pub use get_user_posts::{__path_get_user_posts_handler, get_user_posts_handler};
pub use post_response::PostResponse;
pub use update_post::{__path_update_post_handler, update_post_handler, UpdatePostRequest};

use actix_web::HttpResponse;
use tracing::error;

use crate::post::application::domain::entities::PostContentError;
use crate::post::application::ports::incoming::use_cases::{CreatePostError, GetUserPostsError};
use crate::shared::api::ApiResponse;

pub(crate) fn map_content_error(e: PostContentError) -> HttpResponse {
    ApiResponse::bad_request("INVALID_POST_CONTENT", &e.to_string())
}

/// Shared with the community routes, which create posts inside a community.
pub(crate) fn map_create_post_error(e: CreatePostError) -> HttpResponse {
    match e {
        CreatePostError::CommunityNotFound => {
            ApiResponse::not_found("COMMUNITY_NOT_FOUND", "Community not found")
        }
        CreatePostError::RepositoryError(e) => {
            error!(error = %e, "Failed to create post");
            ApiResponse::internal_error()
        }
    }
}

pub(super) fn map_user_posts_error(e: GetUserPostsError) -> HttpResponse {
    match e {
        GetUserPostsError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        GetUserPostsError::QueryError(e) => {
            error!(error = %e, "Failed to load user posts");
            ApiResponse::internal_error()
        }
    }
}
