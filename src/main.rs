pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::chat;
pub use modules::comment;
pub use modules::community;
pub use modules::friendship;
pub use modules::post;
pub use modules::role;
pub use modules::user;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::{CredentialQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    LoginUserService, RefreshTokenService, RegisterUserService,
};

use crate::chat::adapter::outgoing::{
    ChatQueryPostgres, ChatRepositoryPostgres, MessageQueryPostgres, MessageRepositoryPostgres,
};
use crate::chat::application::chat_use_cases::ChatUseCases;
use crate::chat::application::services::{
    CreateGroupChatService, CreatePrivateChatService, DeleteChatService, DeleteMessageService,
    GetMessageService, GetMessagesBetweenService, GetUserChatsService, GetUserMessagesService,
    SendMessageService,
};

use crate::comment::adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres};
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::services::{
    AddCommentService, DeleteCommentService, GetCommentsService,
};

use crate::community::adapter::outgoing::{CommunityQueryPostgres, CommunityRepositoryPostgres};
use crate::community::application::community_use_cases::CommunityUseCases;
use crate::community::application::services::{
    CommunityMembershipService, CreateCommunityService, DeleteCommunityService,
    GetAllCommunitiesService, GetCommunityMembersService, GetUserCommunitiesService,
    UpdateCommunityService,
};

use crate::friendship::adapter::outgoing::{
    FriendshipQueryPostgres, FriendshipRepositoryPostgres,
};
use crate::friendship::application::friendship_use_cases::FriendshipUseCases;
use crate::friendship::application::services::{
    GetFriendsService, GetPendingRequestsService, RemoveFriendService,
    RespondFriendRequestService, SendFriendRequestService,
};

use crate::post::adapter::outgoing::{PostQueryPostgres, PostRepositoryPostgres};
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::services::{
    CreatePostService, DeletePostService, GetAllPostsService, GetCommunityPostsService,
    GetPostService, GetUserPostsService, UpdatePostService,
};

use crate::role::adapter::outgoing::{RoleQueryPostgres, RoleRepositoryPostgres};
use crate::role::application::role_use_cases::RoleUseCases;
use crate::role::application::services::{
    AssignRoleService, CreateRoleService, DeleteRoleService, GetRoleService, ListRolesService,
    RemoveRoleService,
};

use crate::user::adapter::outgoing::{UserProfileRepositoryPostgres, UserQueryPostgres};
use crate::user::application::services::{GetUserService, SearchUsersService, UpdateProfileService};
use crate::user::application::user_use_cases::UserUseCases;

use crate::api::openapi::ApiDoc;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::ServerConfig;

use actix_web::{middleware::Logger, web, App, HttpServer};
use sea_orm::Database;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub user: UserUseCases,
    pub role: RoleUseCases,
    pub friendship: FriendshipUseCases,
    pub chat: ChatUseCases,
    pub community: CommunityUseCases,
    pub post: PostUseCases,
    pub comment: CommentUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    ServerConfig::load_dotenv();
    let config = ServerConfig::from_env();
    let server_url = config.server_url();

    // Database connection
    let conn = Database::connect(config.connect_options())
        .await
        .map_err(std::io::Error::other)?;
    let db_arc = Arc::new(conn);

    // Security
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(JwtConfig::from_env()));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());

    // Outgoing adapters
    let credential_query = CredentialQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_profile_repo = UserProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let role_query = RoleQueryPostgres::new(Arc::clone(&db_arc));
    let role_repo = RoleRepositoryPostgres::new(Arc::clone(&db_arc));
    let friendship_query = FriendshipQueryPostgres::new(Arc::clone(&db_arc));
    let friendship_repo = FriendshipRepositoryPostgres::new(Arc::clone(&db_arc));
    let chat_query = ChatQueryPostgres::new(Arc::clone(&db_arc));
    let chat_repo = ChatRepositoryPostgres::new(Arc::clone(&db_arc));
    let message_query = MessageQueryPostgres::new(Arc::clone(&db_arc));
    let message_repo = MessageRepositoryPostgres::new(Arc::clone(&db_arc));
    let community_query = CommunityQueryPostgres::new(Arc::clone(&db_arc));
    let community_repo = CommunityRepositoryPostgres::new(Arc::clone(&db_arc));
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment_query = CommentQueryPostgres::new(Arc::clone(&db_arc));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            credential_query.clone(),
            user_repo,
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        login: Arc::new(LoginUserService::new(
            credential_query,
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        refresh_token: Arc::new(RefreshTokenService::new(Arc::clone(&token_provider))),
    };

    let user = UserUseCases {
        get_user: Arc::new(GetUserService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(
            user_profile_repo,
            user_query.clone(),
        )),
        search: Arc::new(SearchUsersService::new(user_query.clone())),
    };

    let role_lookup = Arc::new(GetRoleService::new(role_query.clone()));
    let role = RoleUseCases {
        create: Arc::new(CreateRoleService::new(role_repo.clone(), role_query.clone())),
        delete: Arc::new(DeleteRoleService::new(role_repo.clone())),
        get_by_id: role_lookup.clone(),
        get_by_name: role_lookup,
        list: Arc::new(ListRolesService::new(role_query.clone())),
        assign: Arc::new(AssignRoleService::new(
            role_repo.clone(),
            role_query.clone(),
            user_query.clone(),
        )),
        remove: Arc::new(RemoveRoleService::new(
            role_repo,
            role_query,
            user_query.clone(),
        )),
    };

    let respond_friend_request = Arc::new(RespondFriendRequestService::new(
        friendship_repo.clone(),
        friendship_query.clone(),
    ));
    let friendship = FriendshipUseCases {
        send_request: Arc::new(SendFriendRequestService::new(
            friendship_repo.clone(),
            friendship_query.clone(),
            user_query.clone(),
        )),
        accept: respond_friend_request.clone(),
        decline: respond_friend_request,
        remove: Arc::new(RemoveFriendService::new(friendship_repo)),
        get_friends: Arc::new(GetFriendsService::new(
            friendship_query.clone(),
            user_query.clone(),
        )),
        get_pending: Arc::new(GetPendingRequestsService::new(friendship_query)),
    };

    let chat = ChatUseCases {
        create_private: Arc::new(CreatePrivateChatService::new(
            chat_repo.clone(),
            chat_query.clone(),
            user_query.clone(),
        )),
        create_group: Arc::new(CreateGroupChatService::new(
            chat_repo.clone(),
            user_query.clone(),
        )),
        get_user_chats: Arc::new(GetUserChatsService::new(chat_query.clone())),
        delete_chat: Arc::new(DeleteChatService::new(chat_repo, chat_query.clone())),
        send_message: Arc::new(SendMessageService::new(
            message_repo.clone(),
            chat_query.clone(),
        )),
        get_message: Arc::new(GetMessageService::new(message_query.clone())),
        get_messages_between: Arc::new(GetMessagesBetweenService::new(
            chat_query,
            message_query.clone(),
        )),
        get_user_messages: Arc::new(GetUserMessagesService::new(message_query.clone())),
        delete_message: Arc::new(DeleteMessageService::new(message_repo, message_query)),
    };

    let membership = Arc::new(CommunityMembershipService::new(
        community_repo.clone(),
        community_query.clone(),
    ));
    let community = CommunityUseCases {
        create: Arc::new(CreateCommunityService::new(community_repo.clone())),
        update: Arc::new(UpdateCommunityService::new(
            community_repo.clone(),
            community_query.clone(),
        )),
        delete: Arc::new(DeleteCommunityService::new(
            community_repo,
            community_query.clone(),
        )),
        join: membership.clone(),
        leave: membership,
        get_all: Arc::new(GetAllCommunitiesService::new(community_query.clone())),
        get_user_communities: Arc::new(GetUserCommunitiesService::new(
            community_query.clone(),
            user_query.clone(),
        )),
        get_members: Arc::new(GetCommunityMembersService::new(
            community_query.clone(),
            user_query.clone(),
        )),
    };

    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(
            post_repo.clone(),
            community_query.clone(),
        )),
        get_single: Arc::new(GetPostService::new(post_query.clone())),
        get_all: Arc::new(GetAllPostsService::new(post_query.clone())),
        get_by_author: Arc::new(GetUserPostsService::new(post_query.clone(), user_query)),
        get_by_community: Arc::new(GetCommunityPostsService::new(
            post_query.clone(),
            community_query,
        )),
        update: Arc::new(UpdatePostService::new(post_repo.clone(), post_query.clone())),
        delete: Arc::new(DeletePostService::new(post_repo, post_query.clone())),
    };

    let comment = CommentUseCases {
        add: Arc::new(AddCommentService::new(comment_repo.clone(), post_query.clone())),
        delete: Arc::new(DeleteCommentService::new(comment_repo, comment_query.clone())),
        list: Arc::new(GetCommentsService::new(comment_query, post_query)),
    };

    let state = AppState {
        auth,
        user,
        role,
        friendship,
        chat,
        community,
        post,
        comment,
    };

    let openapi = ApiDoc::openapi();

    info!(server_url = %server_url, "HTTP server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

/// Literal segments (`/me`, `/search`, `/mine`, `/user/..`) are registered
/// before the `{id}` routes they would otherwise collide with.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);

    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::get_me_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_me_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::search_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_handler);

    // Roles
    cfg.service(crate::role::adapter::incoming::web::routes::list_roles_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::create_role_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::get_role_by_name_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::assign_role_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::remove_role_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::get_role_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::delete_role_handler);

    // Friendships
    cfg.service(crate::friendship::adapter::incoming::web::routes::send_friend_request_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::get_pending_requests_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::get_friends_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::remove_friend_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::accept_friend_request_handler);
    cfg.service(crate::friendship::adapter::incoming::web::routes::decline_friend_request_handler);

    // Chats & messages
    cfg.service(crate::chat::adapter::incoming::web::routes::create_private_chat_handler);
    cfg.service(crate::chat::adapter::incoming::web::routes::create_group_chat_handler);
    cfg.service(crate::chat::adapter::incoming::web::routes::get_user_chats_handler);
    cfg.service(crate::chat::adapter::incoming::web::routes::delete_chat_handler);
    cfg.service(crate::chat::adapter::incoming::web::routes::send_message_handler);
    cfg.service(crate::chat::adapter::incoming::web::routes::get_user_messages_handler);
    cfg.service(crate::chat::adapter::incoming::web::routes::get_messages_between_handler);
    cfg.service(crate::chat::adapter::incoming::web::routes::get_message_handler);
    cfg.service(crate::chat::adapter::incoming::web::routes::delete_message_handler);

    // Communities
    cfg.service(crate::community::adapter::incoming::web::routes::create_community_handler);
    cfg.service(crate::community::adapter::incoming::web::routes::get_all_communities_handler);
    cfg.service(crate::community::adapter::incoming::web::routes::get_user_communities_handler);
    cfg.service(crate::community::adapter::incoming::web::routes::update_community_handler);
    cfg.service(crate::community::adapter::incoming::web::routes::delete_community_handler);
    cfg.service(crate::community::adapter::incoming::web::routes::join_community_handler);
    cfg.service(crate::community::adapter::incoming::web::routes::leave_community_handler);
    cfg.service(crate::community::adapter::incoming::web::routes::get_community_members_handler);
    cfg.service(crate::community::adapter::incoming::web::routes::create_community_post_handler);
    cfg.service(crate::community::adapter::incoming::web::routes::get_community_posts_handler);

    // Posts
    cfg.service(crate::post::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_all_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_my_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_user_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::update_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::delete_post_handler);

    // Comments
    cfg.service(crate::comment::adapter::incoming::web::routes::add_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::get_comments_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::delete_comment_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
