use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    LoginUserUseCase, RefreshTokenUseCase, RegisterUserUseCase,
};
use crate::user::application::user_use_cases::UserUseCases;
use crate::user::application::ports::incoming::use_cases::{
    GetUserUseCase, SearchUsersUseCase, UpdateProfileUseCase,
};
use crate::role::application::role_use_cases::RoleUseCases;
use crate::role::application::ports::incoming::use_cases::{
    AssignRoleUseCase, CreateRoleUseCase, DeleteRoleUseCase, GetRoleByNameUseCase,
    GetRoleUseCase, ListRolesUseCase, RemoveRoleUseCase,
};
use crate::friendship::application::friendship_use_cases::FriendshipUseCases;
use crate::friendship::application::ports::incoming::use_cases::{
    AcceptFriendRequestUseCase, DeclineFriendRequestUseCase, GetFriendsUseCase,
    GetPendingRequestsUseCase, RemoveFriendUseCase, SendFriendRequestUseCase,
};
use crate::chat::application::chat_use_cases::ChatUseCases;
use crate::chat::application::ports::incoming::use_cases::{
    CreateGroupChatUseCase, CreatePrivateChatUseCase, DeleteChatUseCase, DeleteMessageUseCase,
    GetMessageUseCase, GetMessagesBetweenUseCase, GetUserChatsUseCase, GetUserMessagesUseCase,
    SendMessageUseCase,
};
use crate::community::application::community_use_cases::CommunityUseCases;
use crate::community::application::ports::incoming::use_cases::{
    CreateCommunityUseCase, DeleteCommunityUseCase, GetAllCommunitiesUseCase,
    GetCommunityMembersUseCase, GetUserCommunitiesUseCase, JoinCommunityUseCase,
    LeaveCommunityUseCase, UpdateCommunityUseCase,
};
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetAllPostsUseCase, GetCommunityPostsUseCase,
    GetPostUseCase, GetUserPostsUseCase, UpdatePostUseCase,
};
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::ports::incoming::use_cases::{
    AddCommentUseCase, DeleteCommentUseCase, GetCommentsUseCase,
};
use crate::tests::support::stubs::StubUseCase;
use crate::AppState;

/// Builds an `AppState` whose use cases default to [`StubUseCase`].
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    user: UserUseCases,
    role: RoleUseCases,
    friendship: FriendshipUseCases,
    chat: ChatUseCases,
    community: CommunityUseCases,
    post: PostUseCases,
    comment: CommentUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let stub = Arc::new(StubUseCase);
        Self {
            auth: AuthUseCases {
                register: stub.clone(),
                login: stub.clone(),
                refresh_token: stub.clone(),
            },
            user: UserUseCases {
                get_user: stub.clone(),
                update_profile: stub.clone(),
                search: stub.clone(),
            },
            role: RoleUseCases {
                create: stub.clone(),
                delete: stub.clone(),
                get_by_id: stub.clone(),
                get_by_name: stub.clone(),
                list: stub.clone(),
                assign: stub.clone(),
                remove: stub.clone(),
            },
            friendship: FriendshipUseCases {
                send_request: stub.clone(),
                accept: stub.clone(),
                decline: stub.clone(),
                remove: stub.clone(),
                get_friends: stub.clone(),
                get_pending: stub.clone(),
            },
            chat: ChatUseCases {
                create_private: stub.clone(),
                create_group: stub.clone(),
                get_user_chats: stub.clone(),
                delete_chat: stub.clone(),
                send_message: stub.clone(),
                get_message: stub.clone(),
                get_messages_between: stub.clone(),
                get_user_messages: stub.clone(),
                delete_message: stub.clone(),
            },
            community: CommunityUseCases {
                create: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
                join: stub.clone(),
                leave: stub.clone(),
                get_all: stub.clone(),
                get_user_communities: stub.clone(),
                get_members: stub.clone(),
            },
            post: PostUseCases {
                create: stub.clone(),
                get_single: stub.clone(),
                get_all: stub.clone(),
                get_by_author: stub.clone(),
                get_by_community: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
            },
            comment: CommentUseCases {
                add: stub.clone(),
                delete: stub.clone(),
                list: stub.clone(),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ─── Auth ───

    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(mut self, uc: impl RefreshTokenUseCase + 'static) -> Self {
        self.auth.refresh_token = Arc::new(uc);
        self
    }

    // ─── User ───

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + 'static) -> Self {
        self.user.get_user = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.user.update_profile = Arc::new(uc);
        self
    }

    pub fn with_search_users(mut self, uc: impl SearchUsersUseCase + 'static) -> Self {
        self.user.search = Arc::new(uc);
        self
    }

    // ─── Role ───

    pub fn with_create_role(mut self, uc: impl CreateRoleUseCase + 'static) -> Self {
        self.role.create = Arc::new(uc);
        self
    }

    pub fn with_delete_role(mut self, uc: impl DeleteRoleUseCase + 'static) -> Self {
        self.role.delete = Arc::new(uc);
        self
    }

    pub fn with_get_role(mut self, uc: impl GetRoleUseCase + 'static) -> Self {
        self.role.get_by_id = Arc::new(uc);
        self
    }

    pub fn with_get_role_by_name(mut self, uc: impl GetRoleByNameUseCase + 'static) -> Self {
        self.role.get_by_name = Arc::new(uc);
        self
    }

    pub fn with_list_roles(mut self, uc: impl ListRolesUseCase + 'static) -> Self {
        self.role.list = Arc::new(uc);
        self
    }

    pub fn with_assign_role(mut self, uc: impl AssignRoleUseCase + 'static) -> Self {
        self.role.assign = Arc::new(uc);
        self
    }

    pub fn with_remove_role(mut self, uc: impl RemoveRoleUseCase + 'static) -> Self {
        self.role.remove = Arc::new(uc);
        self
    }

    // ─── Friendship ───

    pub fn with_send_friend_request(mut self, uc: impl SendFriendRequestUseCase + 'static) -> Self {
        self.friendship.send_request = Arc::new(uc);
        self
    }

    pub fn with_accept_friend_request(
        mut self,
        uc: impl AcceptFriendRequestUseCase + 'static,
    ) -> Self {
        self.friendship.accept = Arc::new(uc);
        self
    }

    pub fn with_decline_friend_request(
        mut self,
        uc: impl DeclineFriendRequestUseCase + 'static,
    ) -> Self {
        self.friendship.decline = Arc::new(uc);
        self
    }

    pub fn with_remove_friend(mut self, uc: impl RemoveFriendUseCase + 'static) -> Self {
        self.friendship.remove = Arc::new(uc);
        self
    }

    pub fn with_get_friends(mut self, uc: impl GetFriendsUseCase + 'static) -> Self {
        self.friendship.get_friends = Arc::new(uc);
        self
    }

    pub fn with_get_pending_requests(
        mut self,
        uc: impl GetPendingRequestsUseCase + 'static,
    ) -> Self {
        self.friendship.get_pending = Arc::new(uc);
        self
    }

    // ─── Chat ───

    pub fn with_create_private_chat(mut self, uc: impl CreatePrivateChatUseCase + 'static) -> Self {
        self.chat.create_private = Arc::new(uc);
        self
    }

    pub fn with_create_group_chat(mut self, uc: impl CreateGroupChatUseCase + 'static) -> Self {
        self.chat.create_group = Arc::new(uc);
        self
    }

    pub fn with_get_user_chats(mut self, uc: impl GetUserChatsUseCase + 'static) -> Self {
        self.chat.get_user_chats = Arc::new(uc);
        self
    }

    pub fn with_delete_chat(mut self, uc: impl DeleteChatUseCase + 'static) -> Self {
        self.chat.delete_chat = Arc::new(uc);
        self
    }

    pub fn with_send_message(mut self, uc: impl SendMessageUseCase + 'static) -> Self {
        self.chat.send_message = Arc::new(uc);
        self
    }

    pub fn with_get_message(mut self, uc: impl GetMessageUseCase + 'static) -> Self {
        self.chat.get_message = Arc::new(uc);
        self
    }

    pub fn with_get_messages_between(
        mut self,
        uc: impl GetMessagesBetweenUseCase + 'static,
    ) -> Self {
        self.chat.get_messages_between = Arc::new(uc);
        self
    }

    pub fn with_get_user_messages(mut self, uc: impl GetUserMessagesUseCase + 'static) -> Self {
        self.chat.get_user_messages = Arc::new(uc);
        self
    }

    pub fn with_delete_message(mut self, uc: impl DeleteMessageUseCase + 'static) -> Self {
        self.chat.delete_message = Arc::new(uc);
        self
    }

    // ─── Community ───

    pub fn with_create_community(mut self, uc: impl CreateCommunityUseCase + 'static) -> Self {
        self.community.create = Arc::new(uc);
        self
    }

    pub fn with_update_community(mut self, uc: impl UpdateCommunityUseCase + 'static) -> Self {
        self.community.update = Arc::new(uc);
        self
    }

    pub fn with_delete_community(mut self, uc: impl DeleteCommunityUseCase + 'static) -> Self {
        self.community.delete = Arc::new(uc);
        self
    }

    pub fn with_join_community(mut self, uc: impl JoinCommunityUseCase + 'static) -> Self {
        self.community.join = Arc::new(uc);
        self
    }

    pub fn with_leave_community(mut self, uc: impl LeaveCommunityUseCase + 'static) -> Self {
        self.community.leave = Arc::new(uc);
        self
    }

    pub fn with_get_all_communities(mut self, uc: impl GetAllCommunitiesUseCase + 'static) -> Self {
        self.community.get_all = Arc::new(uc);
        self
    }

    pub fn with_get_user_communities(
        mut self,
        uc: impl GetUserCommunitiesUseCase + 'static,
    ) -> Self {
        self.community.get_user_communities = Arc::new(uc);
        self
    }

    pub fn with_get_community_members(
        mut self,
        uc: impl GetCommunityMembersUseCase + 'static,
    ) -> Self {
        self.community.get_members = Arc::new(uc);
        self
    }

    // ─── Post ───

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + 'static) -> Self {
        self.post.create = Arc::new(uc);
        self
    }

    pub fn with_get_post(mut self, uc: impl GetPostUseCase + 'static) -> Self {
        self.post.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_all_posts(mut self, uc: impl GetAllPostsUseCase + 'static) -> Self {
        self.post.get_all = Arc::new(uc);
        self
    }

    pub fn with_get_user_posts(mut self, uc: impl GetUserPostsUseCase + 'static) -> Self {
        self.post.get_by_author = Arc::new(uc);
        self
    }

    pub fn with_get_community_posts(mut self, uc: impl GetCommunityPostsUseCase + 'static) -> Self {
        self.post.get_by_community = Arc::new(uc);
        self
    }

    pub fn with_update_post(mut self, uc: impl UpdatePostUseCase + 'static) -> Self {
        self.post.update = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + 'static) -> Self {
        self.post.delete = Arc::new(uc);
        self
    }

    // ─── Comment ───

    pub fn with_add_comment(mut self, uc: impl AddCommentUseCase + 'static) -> Self {
        self.comment.add = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(mut self, uc: impl DeleteCommentUseCase + 'static) -> Self {
        self.comment.delete = Arc::new(uc);
        self
    }

    pub fn with_get_comments(mut self, uc: impl GetCommentsUseCase + 'static) -> Self {
        self.comment.list = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            user: self.user,
            role: self.role,
            friendship: self.friendship,
            chat: self.chat,
            community: self.community,
            post: self.post,
            comment: self.comment,
        })
    }
}
