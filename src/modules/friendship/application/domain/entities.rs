use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
    Declined,
}

impl FriendshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendshipStatus::Pending => "PENDING",
            FriendshipStatus::Accepted => "ACCEPTED",
            FriendshipStatus::Declined => "DECLINED",
        }
    }

    /// PENDING and ACCEPTED rows block a new request for the same pair.
    pub fn is_active(&self) -> bool {
        matches!(self, FriendshipStatus::Pending | FriendshipStatus::Accepted)
    }
}

impl fmt::Display for FriendshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown friendship status: {0}")]
pub struct UnknownFriendshipStatus(pub String);

impl FromStr for FriendshipStatus {
    type Err = UnknownFriendshipStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(FriendshipStatus::Pending),
            "ACCEPTED" => Ok(FriendshipStatus::Accepted),
            "DECLINED" => Ok(FriendshipStatus::Declined),
            other => Err(UnknownFriendshipStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Friendship {
    pub id: Uuid,
    pub requester_id: UserId,
    pub receiver_id: UserId,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    /// The participant that is not `user_id`.
    pub fn other_party(&self, user_id: UserId) -> UserId {
        if self.requester_id == user_id {
            self.receiver_id
        } else {
            self.requester_id
        }
    }
}
