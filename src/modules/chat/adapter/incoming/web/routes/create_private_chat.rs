use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::chat::application::ports::incoming::use_cases::CreatePrivateChatError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::chat_response::ChatResponse;

/// Open a private chat with a user
///
/// Returns the pair's existing PRIVATE chat when there is one.
#[utoipa::path(
    post,
    path = "/api/chats/private/{user_id}",
    tag = "chats",
    security(("BearerAuth" = [])),
    params(("user_id" = Uuid, Path, description = "The other participant")),
    responses(
        (status = 200, description = "Existing chat of the pair", body = inline(SuccessResponse<ChatResponse>)),
        (status = 201, description = "New chat", body = inline(SuccessResponse<ChatResponse>)),
        (status = 400, description = "Chat with yourself or malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/chats/private/{user_id}")]
pub async fn create_private_chat_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .chat
        .create_private
        .execute(UserId::from(user.user_id), UserId::from(path.into_inner()))
        .await
    {
        Ok(result) => {
            ApiResponse::created_or_existing(ChatResponse::from(result.chat), result.created)
        }

        Err(CreatePrivateChatError::SelfChat) => {
            ApiResponse::bad_request("SELF_CHAT", "Cannot create a chat with yourself")
        }

        Err(CreatePrivateChatError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(CreatePrivateChatError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create private chat");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::application::domain::entities::ChatType;
    use crate::chat::application::ports::incoming::use_cases::{
        CreatePrivateChatUseCase, PrivateChat,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::chat;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    #[derive(Clone)]
    struct MockCreatePrivate {
        result: Result<PrivateChat, CreatePrivateChatError>,
    }

    #[async_trait]
    impl CreatePrivateChatUseCase for MockCreatePrivate {
        async fn execute(
            &self,
            _user_id: UserId,
            _other_id: UserId,
        ) -> Result<PrivateChat, CreatePrivateChatError> {
            self.result.clone()
        }
    }

    async fn call(mock: MockCreatePrivate) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_private_chat(mock)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_private_chat_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/chats/private/{}", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_new_chat_is_created() {
        let (status, body) = call(MockCreatePrivate {
            result: Ok(PrivateChat {
                chat: chat(ChatType::Private, &[Uuid::new_v4(), Uuid::new_v4()]),
                created: true,
            }),
        })
        .await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["chat_type"], "PRIVATE");
        assert_eq!(body["data"]["participant_ids"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_existing_chat_is_ok() {
        let (status, _) = call(MockCreatePrivate {
            result: Ok(PrivateChat {
                chat: chat(ChatType::Private, &[Uuid::new_v4(), Uuid::new_v4()]),
                created: false,
            }),
        })
        .await;

        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn test_chat_with_self_is_bad_request() {
        let (status, body) = call(MockCreatePrivate {
            result: Err(CreatePrivateChatError::SelfChat),
        })
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "SELF_CHAT");
    }
}
