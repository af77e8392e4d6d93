mod community_posts;
mod community_response;
mod create_community;
mod delete_community;
mod get_all_communities;
mod get_community_members;
mod get_user_communities;
mod membership;
mod update_community;

pub use community_posts::{
    __path_create_community_post_handler, __path_get_community_posts_handler,
    create_community_post_handler, get_community_posts_handler, CommunityPostRequest,
};
pub use community_response::CommunityResponse;
pub use create_community::{
    __path_create_community_handler, create_community_handler, CreateCommunityRequest,
};
pub use delete_community::{__path_delete_community_handler, delete_community_handler};
pub use get_all_communities::{__path_get_all_communities_handler, get_all_communities_handler};
pub use get_community_members::{
    __path_get_community_members_handler, get_community_members_handler,
};
pub use get_user_communities::{
    __path_get_user_communities_handler, get_user_communities_handler,
};
pub use membership::{
    __path_join_community_handler, __path_leave_community_handler, join_community_handler,
    leave_community_handler,
};
pub use update_community::{
    __path_update_community_handler, update_community_handler, UpdateCommunityRequest,
};

use actix_web::HttpResponse;

use crate::community::application::domain::entities::CommunityFieldError;
use crate::shared::api::ApiResponse;

fn map_field_error(e: CommunityFieldError) -> HttpResponse {
    let code = match e {
        CommunityFieldError::NameEmpty | CommunityFieldError::NameTooLong => {
            "INVALID_COMMUNITY_NAME"
        }
        CommunityFieldError::DescriptionTooLong => "INVALID_COMMUNITY_DESCRIPTION",
    };
    ApiResponse::bad_request(code, &e.to_string())
}

fn community_not_found() -> HttpResponse {
    ApiResponse::not_found("COMMUNITY_NOT_FOUND", "Community not found")
}
