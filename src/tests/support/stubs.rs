//! Placeholder use cases wired into `TestAppStateBuilder` by default.
//!
//! Route tests replace the ones they exercise; reaching a stub means the test
//! forgot to configure a use case.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    LoginUserCommand, LoginUserError, LoginUserOutput, LoginUserUseCase, RefreshTokenError,
    RefreshTokenOutput, RefreshTokenUseCase, RegisterUserCommand, RegisterUserError,
    RegisterUserOutput, RegisterUserUseCase,
};
use crate::chat::application::domain::entities::{Chat, Message};
use crate::chat::application::ports::incoming::use_cases::{
    CreateGroupChatCommand, CreateGroupChatError, CreateGroupChatUseCase, CreatePrivateChatError,
    CreatePrivateChatUseCase, DeleteChatError, DeleteChatUseCase, DeleteMessageError,
    DeleteMessageUseCase, GetMessageError, GetMessageUseCase, GetMessagesBetweenError,
    GetMessagesBetweenUseCase, GetUserChatsError, GetUserChatsUseCase, GetUserMessagesError,
    GetUserMessagesUseCase, PrivateChat, SendMessageCommand, SendMessageError, SendMessageUseCase,
};
use crate::comment::application::domain::entities::Comment;
use crate::comment::application::ports::incoming::use_cases::{
    AddCommentCommand, AddCommentError, AddCommentUseCase, DeleteCommentError,
    DeleteCommentUseCase, GetCommentsError, GetCommentsUseCase,
};
use crate::community::application::domain::entities::Community;
use crate::community::application::ports::incoming::use_cases::{
    CommunityMembershipError, CreateCommunityCommand, CreateCommunityError,
    CreateCommunityUseCase, DeleteCommunityError, DeleteCommunityUseCase, GetAllCommunitiesError,
    GetAllCommunitiesUseCase, GetCommunityMembersError, GetCommunityMembersUseCase,
    GetUserCommunitiesError, GetUserCommunitiesUseCase, JoinCommunityUseCase,
    LeaveCommunityUseCase, UpdateCommunityCommand, UpdateCommunityError, UpdateCommunityUseCase,
};
use crate::friendship::application::domain::entities::Friendship;
use crate::friendship::application::ports::incoming::use_cases::{
    AcceptFriendRequestUseCase, DeclineFriendRequestUseCase, GetFriendsError, GetFriendsUseCase,
    GetPendingRequestsError, GetPendingRequestsUseCase, RemoveFriendError, RemoveFriendUseCase,
    RespondFriendRequestError, SendFriendRequestError, SendFriendRequestUseCase,
};
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, CreatePostUseCase, DeletePostError, DeletePostUseCase,
    GetAllPostsError, GetAllPostsUseCase, GetCommunityPostsError, GetCommunityPostsUseCase,
    GetPostError, GetPostUseCase, GetUserPostsError, GetUserPostsUseCase, UpdatePostCommand,
    UpdatePostError, UpdatePostUseCase,
};
use crate::role::application::domain::entities::Role;
use crate::role::application::ports::incoming::use_cases::{
    AssignRoleUseCase, CreateRoleCommand, CreateRoleError, CreateRoleUseCase, DeleteRoleError,
    DeleteRoleUseCase, GetRoleByNameUseCase, GetRoleError, GetRoleUseCase, ListRolesError,
    ListRolesUseCase, RemoveRoleUseCase, RoleAssignmentError,
};
use crate::user::application::domain::entities::UserProfile;
use crate::user::application::ports::incoming::use_cases::{
    GetUserError, GetUserUseCase, SearchUsersCommand, SearchUsersError, SearchUsersUseCase,
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};

const NOT_CONFIGURED: &str = "use case not configured for this test";

#[derive(Clone, Copy, Default)]
pub struct StubUseCase;

// ─── Auth ───

#[async_trait]
impl RegisterUserUseCase for StubUseCase {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl LoginUserUseCase for StubUseCase {
    async fn execute(&self, _command: LoginUserCommand) -> Result<LoginUserOutput, LoginUserError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl RefreshTokenUseCase for StubUseCase {
    async fn execute(&self, _token: &str) -> Result<RefreshTokenOutput, RefreshTokenError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

// ─── User ───

#[async_trait]
impl GetUserUseCase for StubUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, GetUserError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl UpdateProfileUseCase for StubUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl SearchUsersUseCase for StubUseCase {
    async fn execute(
        &self,
        _command: SearchUsersCommand,
    ) -> Result<Vec<UserProfile>, SearchUsersError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

// ─── Role ───

#[async_trait]
impl CreateRoleUseCase for StubUseCase {
    async fn execute(&self, _command: CreateRoleCommand) -> Result<Role, CreateRoleError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl DeleteRoleUseCase for StubUseCase {
    async fn execute(&self, _role_id: Uuid) -> Result<(), DeleteRoleError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetRoleUseCase for StubUseCase {
    async fn execute(&self, _role_id: Uuid) -> Result<Role, GetRoleError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetRoleByNameUseCase for StubUseCase {
    async fn execute(&self, _name: String) -> Result<Role, GetRoleError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl ListRolesUseCase for StubUseCase {
    async fn execute(&self) -> Result<Vec<Role>, ListRolesError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl AssignRoleUseCase for StubUseCase {
    async fn execute(&self, _user_id: UserId, _role_id: Uuid) -> Result<Role, RoleAssignmentError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl RemoveRoleUseCase for StubUseCase {
    async fn execute(&self, _user_id: UserId, _role_id: Uuid) -> Result<Role, RoleAssignmentError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

// ─── Friendship ───

#[async_trait]
impl SendFriendRequestUseCase for StubUseCase {
    async fn execute(
        &self,
        _requester_id: UserId,
        _receiver_id: UserId,
    ) -> Result<Friendship, SendFriendRequestError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl AcceptFriendRequestUseCase for StubUseCase {
    async fn execute(
        &self,
        _friendship_id: Uuid,
        _actor_id: UserId,
    ) -> Result<Friendship, RespondFriendRequestError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl DeclineFriendRequestUseCase for StubUseCase {
    async fn execute(
        &self,
        _friendship_id: Uuid,
        _actor_id: UserId,
    ) -> Result<Friendship, RespondFriendRequestError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl RemoveFriendUseCase for StubUseCase {
    async fn execute(&self, _user_id: UserId, _friend_id: UserId) -> Result<(), RemoveFriendError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetFriendsUseCase for StubUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<UserProfile>, GetFriendsError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetPendingRequestsUseCase for StubUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<Friendship>, GetPendingRequestsError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

// ─── Chat ───

#[async_trait]
impl CreatePrivateChatUseCase for StubUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _other_id: UserId,
    ) -> Result<PrivateChat, CreatePrivateChatError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl CreateGroupChatUseCase for StubUseCase {
    async fn execute(
        &self,
        _command: CreateGroupChatCommand,
    ) -> Result<Chat, CreateGroupChatError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetUserChatsUseCase for StubUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<Chat>, GetUserChatsError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl DeleteChatUseCase for StubUseCase {
    async fn execute(&self, _chat_id: Uuid, _actor_id: UserId) -> Result<(), DeleteChatError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl SendMessageUseCase for StubUseCase {
    async fn execute(
        &self,
        _chat_id: Uuid,
        _sender_id: UserId,
        _command: SendMessageCommand,
    ) -> Result<Message, SendMessageError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetMessageUseCase for StubUseCase {
    async fn execute(&self, _message_id: Uuid) -> Result<Message, GetMessageError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetMessagesBetweenUseCase for StubUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _other_id: UserId,
    ) -> Result<Vec<Message>, GetMessagesBetweenError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetUserMessagesUseCase for StubUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<Message>, GetUserMessagesError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl DeleteMessageUseCase for StubUseCase {
    async fn execute(&self, _message_id: Uuid, _actor_id: UserId) -> Result<(), DeleteMessageError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

// ─── Community ───

#[async_trait]
impl CreateCommunityUseCase for StubUseCase {
    async fn execute(
        &self,
        _admin_id: UserId,
        _command: CreateCommunityCommand,
    ) -> Result<Community, CreateCommunityError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl UpdateCommunityUseCase for StubUseCase {
    async fn execute(
        &self,
        _community_id: Uuid,
        _actor_id: UserId,
        _command: UpdateCommunityCommand,
    ) -> Result<Community, UpdateCommunityError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl DeleteCommunityUseCase for StubUseCase {
    async fn execute(
        &self,
        _community_id: Uuid,
        _actor_id: UserId,
    ) -> Result<(), DeleteCommunityError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl JoinCommunityUseCase for StubUseCase {
    async fn execute(
        &self,
        _community_id: Uuid,
        _user_id: UserId,
    ) -> Result<(), CommunityMembershipError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl LeaveCommunityUseCase for StubUseCase {
    async fn execute(
        &self,
        _community_id: Uuid,
        _user_id: UserId,
    ) -> Result<(), CommunityMembershipError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetAllCommunitiesUseCase for StubUseCase {
    async fn execute(&self) -> Result<Vec<Community>, GetAllCommunitiesError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetUserCommunitiesUseCase for StubUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<Community>, GetUserCommunitiesError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetCommunityMembersUseCase for StubUseCase {
    async fn execute(
        &self,
        _community_id: Uuid,
    ) -> Result<Vec<UserProfile>, GetCommunityMembersError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

// ─── Post ───

#[async_trait]
impl CreatePostUseCase for StubUseCase {
    async fn execute(
        &self,
        _author_id: UserId,
        _command: CreatePostCommand,
    ) -> Result<Post, CreatePostError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetPostUseCase for StubUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<Post, GetPostError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetAllPostsUseCase for StubUseCase {
    async fn execute(&self) -> Result<Vec<Post>, GetAllPostsError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetUserPostsUseCase for StubUseCase {
    async fn execute(&self, _author_id: UserId) -> Result<Vec<Post>, GetUserPostsError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetCommunityPostsUseCase for StubUseCase {
    async fn execute(&self, _community_id: Uuid) -> Result<Vec<Post>, GetCommunityPostsError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl UpdatePostUseCase for StubUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _actor_id: UserId,
        _command: UpdatePostCommand,
    ) -> Result<Post, UpdatePostError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl DeletePostUseCase for StubUseCase {
    async fn execute(&self, _post_id: Uuid, _actor_id: UserId) -> Result<(), DeletePostError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

// ─── Comment ───

#[async_trait]
impl AddCommentUseCase for StubUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _author_id: UserId,
        _command: AddCommentCommand,
    ) -> Result<Comment, AddCommentError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl DeleteCommentUseCase for StubUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _comment_id: Uuid,
        _actor_id: UserId,
    ) -> Result<(), DeleteCommentError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

#[async_trait]
impl GetCommentsUseCase for StubUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<Vec<Comment>, GetCommentsError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}
