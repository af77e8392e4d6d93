use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::{Chat, ChatType, Message};
use crate::comment::application::domain::entities::Comment;
use crate::community::application::domain::entities::Community;
use crate::friendship::application::domain::entities::{Friendship, FriendshipStatus};
use crate::post::application::domain::entities::Post;
use crate::user::application::domain::entities::UserProfile;

pub fn user_profile(id: Uuid, username: &str) -> UserProfile {
    UserProfile {
        id: UserId::from(id),
        username: username.to_string(),
        first_name: username.to_string(),
        last_name: None,
        age: None,
        gender: None,
        roles: vec!["ROLE_USER".to_string()],
        created_at: Utc::now(),
    }
}

pub fn friendship(requester: Uuid, receiver: Uuid, status: FriendshipStatus) -> Friendship {
    Friendship {
        id: Uuid::new_v4(),
        requester_id: UserId::from(requester),
        receiver_id: UserId::from(receiver),
        status,
        created_at: Utc::now(),
    }
}

pub fn chat(chat_type: ChatType, participants: &[Uuid]) -> Chat {
    Chat {
        id: Uuid::new_v4(),
        chat_type,
        participant_ids: participants.iter().copied().map(UserId::from).collect(),
        created_at: Utc::now(),
    }
}

pub fn message(chat_id: Uuid, sender: Uuid, content: &str) -> Message {
    Message {
        id: Uuid::new_v4(),
        chat_id,
        sender_id: UserId::from(sender),
        content: content.to_string(),
        sent_at: Utc::now(),
    }
}

pub fn community(name: &str, admin: Uuid) -> Community {
    Community {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        admin_id: UserId::from(admin),
        created_at: Utc::now(),
    }
}

pub fn post(author: Uuid, content: &str) -> Post {
    let now = Utc::now();
    Post {
        id: Uuid::new_v4(),
        content: content.to_string(),
        author_id: UserId::from(author),
        author_username: "author".to_string(),
        community_id: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn comment(post_id: Uuid, author: Uuid, content: &str) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        content: content.to_string(),
        author_id: UserId::from(author),
        post_id,
        created_at: Utc::now(),
    }
}
