use async_trait::async_trait;

use crate::user::application::domain::entities::{is_valid_age, Gender, UserProfile};
use crate::user::application::ports::outgoing::UserSearchCriteria;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchUsersCommand {
    criteria: UserSearchCriteria,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchUsersCommandError {
    #[error("Age must be between 0 and 150")]
    InvalidAge,

    #[error("Gender must be MALE or FEMALE")]
    InvalidGender,
}

impl SearchUsersCommand {
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        age: Option<i32>,
        gender: Option<String>,
    ) -> Result<Self, SearchUsersCommandError> {
        let clean = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if age.is_some_and(|a| !is_valid_age(a)) {
            return Err(SearchUsersCommandError::InvalidAge);
        }

        let gender = match clean(gender) {
            Some(g) => Some(
                g.parse::<Gender>()
                    .map_err(|_| SearchUsersCommandError::InvalidGender)?,
            ),
            None => None,
        };

        Ok(Self {
            criteria: UserSearchCriteria {
                first_name: clean(first_name),
                last_name: clean(last_name),
                age,
                gender,
            },
        })
    }

    pub fn criteria(&self) -> &UserSearchCriteria {
        &self.criteria
    }

    pub fn into_criteria(self) -> UserSearchCriteria {
        self.criteria
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait SearchUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SearchUsersCommand,
    ) -> Result<Vec<UserProfile>, SearchUsersError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_become_none() {
        let cmd =
            SearchUsersCommand::new(Some(" ".to_string()), None, None, Some(String::new()))
                .unwrap();
        assert_eq!(cmd.criteria(), &UserSearchCriteria::default());
    }

    #[test]
    fn parses_gender_filter() {
        let cmd = SearchUsersCommand::new(None, None, Some(20), Some("MALE".to_string())).unwrap();
        assert_eq!(cmd.criteria().gender, Some(Gender::Male));
        assert_eq!(cmd.criteria().age, Some(20));
    }

    #[test]
    fn rejects_bad_filters() {
        assert_eq!(
            SearchUsersCommand::new(None, None, Some(200), None),
            Err(SearchUsersCommandError::InvalidAge)
        );
        assert_eq!(
            SearchUsersCommand::new(None, None, None, Some("x".to_string())),
            Err(SearchUsersCommandError::InvalidGender)
        );
    }
}
