mod create_post_service;
mod delete_post_service;
mod get_all_posts_service;
mod get_community_posts_service;
mod get_post_service;
mod get_user_posts_service;
mod update_post_service;

pub use create_post_service::CreatePostService;
pub use delete_post_service::DeletePostService;
pub use get_all_posts_service::GetAllPostsService;
pub use get_community_posts_service::GetCommunityPostsService;
pub use get_post_service::GetPostService;
pub use get_user_posts_service::GetUserPostsService;
pub use update_post_service::UpdatePostService;
