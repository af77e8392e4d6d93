//! mockall doubles for outgoing ports shared by several service test modules.

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::{Chat, ChatType, Message};
use crate::chat::application::ports::outgoing::{
    ChatQuery, ChatQueryError, ChatRepository, ChatRepositoryError, MessageQuery,
    MessageQueryError, MessageRepository, MessageRepositoryError,
};
use crate::comment::application::domain::entities::Comment;
use crate::comment::application::ports::outgoing::{
    CommentQuery, CommentQueryError, CommentRepository, CommentRepositoryError,
};
use crate::community::application::domain::entities::Community;
use crate::community::application::ports::outgoing::{
    CommunityQuery, CommunityQueryError, CommunityRepository, CommunityRepositoryError,
    NewCommunity, UpdateCommunityData,
};
use crate::friendship::application::domain::entities::{Friendship, FriendshipStatus};
use crate::friendship::application::ports::outgoing::{
    FriendshipQuery, FriendshipQueryError, FriendshipRepository, FriendshipRepositoryError,
};
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::outgoing::{
    NewPost, PostQuery, PostQueryError, PostRepository, PostRepositoryError,
};
use crate::role::application::domain::entities::{Role, RoleType};
use crate::role::application::ports::outgoing::{
    RoleQuery, RoleQueryError, RoleRepository, RoleRepositoryError,
};
use crate::user::application::domain::entities::UserProfile;
use crate::user::application::ports::outgoing::{UserQuery, UserQueryError, UserSearchCriteria};

mock! {
    pub UserQueryMock {}

    #[async_trait]
    impl UserQuery for UserQueryMock {
        async fn find_by_id(&self, id: UserId) -> Result<Option<UserProfile>, UserQueryError>;
        async fn find_by_ids(&self, ids: Vec<UserId>) -> Result<Vec<UserProfile>, UserQueryError>;
        async fn exists(&self, id: UserId) -> Result<bool, UserQueryError>;
        async fn search(
            &self,
            criteria: UserSearchCriteria,
        ) -> Result<Vec<UserProfile>, UserQueryError>;
    }
}

mock! {
    pub CommunityQueryMock {}

    #[async_trait]
    impl CommunityQuery for CommunityQueryMock {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Community>, CommunityQueryError>;
        async fn exists(&self, id: Uuid) -> Result<bool, CommunityQueryError>;
        async fn list_all(&self) -> Result<Vec<Community>, CommunityQueryError>;
        async fn list_for_member(&self, user_id: UserId) -> Result<Vec<Community>, CommunityQueryError>;
        async fn list_member_ids(&self, community_id: Uuid) -> Result<Vec<UserId>, CommunityQueryError>;
    }
}

mock! {
    pub CommunityRepositoryMock {}

    #[async_trait]
    impl CommunityRepository for CommunityRepositoryMock {
        async fn create(&self, community: NewCommunity) -> Result<Community, CommunityRepositoryError>;
        async fn update(
            &self,
            id: Uuid,
            data: UpdateCommunityData,
        ) -> Result<Community, CommunityRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), CommunityRepositoryError>;
        async fn add_member(&self, community_id: Uuid, user_id: UserId)
            -> Result<(), CommunityRepositoryError>;
        async fn remove_member(&self, community_id: Uuid, user_id: UserId)
            -> Result<(), CommunityRepositoryError>;
    }
}

mock! {
    pub PostQueryMock {}

    #[async_trait]
    impl PostQuery for PostQueryMock {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, PostQueryError>;
        async fn list_all(&self) -> Result<Vec<Post>, PostQueryError>;
        async fn list_by_author(&self, author_id: UserId) -> Result<Vec<Post>, PostQueryError>;
        async fn list_by_community(&self, community_id: Uuid) -> Result<Vec<Post>, PostQueryError>;
    }
}

mock! {
    pub RoleQueryMock {}

    #[async_trait]
    impl RoleQuery for RoleQueryMock {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, RoleQueryError>;
        async fn find_by_name(&self, name: String) -> Result<Option<Role>, RoleQueryError>;
        async fn list_all(&self) -> Result<Vec<Role>, RoleQueryError>;
    }
}

mock! {
    pub RoleRepositoryMock {}

    #[async_trait]
    impl RoleRepository for RoleRepositoryMock {
        async fn create(&self, role: RoleType) -> Result<Role, RoleRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RoleRepositoryError>;
        async fn assign(&self, user_id: UserId, role_id: Uuid) -> Result<(), RoleRepositoryError>;
        async fn remove(&self, user_id: UserId, role_id: Uuid) -> Result<(), RoleRepositoryError>;
    }
}

mock! {
    pub FriendshipQueryMock {}

    #[async_trait]
    impl FriendshipQuery for FriendshipQueryMock {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Friendship>, FriendshipQueryError>;
        async fn find_active_between(
            &self,
            a: UserId,
            b: UserId,
        ) -> Result<Option<Friendship>, FriendshipQueryError>;
        async fn list_accepted_for(&self, user_id: UserId)
            -> Result<Vec<Friendship>, FriendshipQueryError>;
        async fn list_pending_for_receiver(
            &self,
            user_id: UserId,
        ) -> Result<Vec<Friendship>, FriendshipQueryError>;
    }
}

mock! {
    pub FriendshipRepositoryMock {}

    #[async_trait]
    impl FriendshipRepository for FriendshipRepositoryMock {
        async fn create_request(
            &self,
            requester_id: UserId,
            receiver_id: UserId,
        ) -> Result<Friendship, FriendshipRepositoryError>;
        async fn update_status(
            &self,
            id: Uuid,
            status: FriendshipStatus,
        ) -> Result<Friendship, FriendshipRepositoryError>;
        async fn delete_between(&self, a: UserId, b: UserId) -> Result<u64, FriendshipRepositoryError>;
    }
}

mock! {
    pub ChatQueryMock {}

    #[async_trait]
    impl ChatQuery for ChatQueryMock {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Chat>, ChatQueryError>;
        async fn find_private_between(&self, a: UserId, b: UserId)
            -> Result<Option<Chat>, ChatQueryError>;
        async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Chat>, ChatQueryError>;
    }
}

mock! {
    pub ChatRepositoryMock {}

    #[async_trait]
    impl ChatRepository for ChatRepositoryMock {
        async fn create(
            &self,
            chat_type: ChatType,
            participant_ids: Vec<UserId>,
        ) -> Result<Chat, ChatRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), ChatRepositoryError>;
    }
}

mock! {
    pub MessageQueryMock {}

    #[async_trait]
    impl MessageQuery for MessageQueryMock {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, MessageQueryError>;
        async fn list_by_chat(&self, chat_id: Uuid) -> Result<Vec<Message>, MessageQueryError>;
        async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Message>, MessageQueryError>;
    }
}

mock! {
    pub MessageRepositoryMock {}

    #[async_trait]
    impl MessageRepository for MessageRepositoryMock {
        async fn create(
            &self,
            chat_id: Uuid,
            sender_id: UserId,
            content: String,
        ) -> Result<Message, MessageRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), MessageRepositoryError>;
    }
}

mock! {
    pub PostRepositoryMock {}

    #[async_trait]
    impl PostRepository for PostRepositoryMock {
        async fn create(&self, post: NewPost) -> Result<Post, PostRepositoryError>;
        async fn update_content(&self, id: Uuid, content: String) -> Result<Post, PostRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), PostRepositoryError>;
    }
}

mock! {
    pub CommentQueryMock {}

    #[async_trait]
    impl CommentQuery for CommentQueryMock {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, CommentQueryError>;
        async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, CommentQueryError>;
    }
}

mock! {
    pub CommentRepositoryMock {}

    #[async_trait]
    impl CommentRepository for CommentRepositoryMock {
        async fn create(
            &self,
            post_id: Uuid,
            author_id: UserId,
            content: String,
        ) -> Result<Comment, CommentRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), CommentRepositoryError>;
    }
}
