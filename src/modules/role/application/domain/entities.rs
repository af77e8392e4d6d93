use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The closed set of role names the system recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleType {
    User,
    Admin,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::User => "ROLE_USER",
            RoleType::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for RoleType {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ROLE_USER" => Ok(RoleType::User),
            "ROLE_ADMIN" => Ok(RoleType::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
}
