mod create_post;
mod delete_post;
mod get_all_posts;
mod get_community_posts;
mod get_post;
mod get_user_posts;
mod update_post;

pub use create_post::{CreatePostCommand, CreatePostError, CreatePostUseCase};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use get_all_posts::{GetAllPostsError, GetAllPostsUseCase};
pub use get_community_posts::{GetCommunityPostsError, GetCommunityPostsUseCase};
pub use get_post::{GetPostError, GetPostUseCase};
pub use get_user_posts::{GetUserPostsError, GetUserPostsUseCase};
pub use update_post::{UpdatePostCommand, UpdatePostError, UpdatePostUseCase};
