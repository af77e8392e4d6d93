use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::chat::application::ports::incoming::use_cases::{SendMessageCommand, SendMessageError};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::chat_response::MessageResponse;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SendMessageRequest {
    /// Trimmed; 1 to 500 characters
    #[schema(example = "See you tomorrow")]
    pub content: String,
}

/// Send a message
#[utoipa::path(
    post,
    path = "/api/chats/{id}/messages",
    tag = "messages",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Chat ID")),
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Stored message", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Blank or too long content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not a participant", body = ErrorResponse),
        (status = 404, description = "Chat not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/chats/{id}/messages")]
pub async fn send_message_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SendMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match SendMessageCommand::new(&req.content) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("INVALID_MESSAGE", &e.to_string()),
    };

    match data
        .chat
        .send_message
        .execute(path.into_inner(), UserId::from(user.user_id), command)
        .await
    {
        Ok(message) => ApiResponse::created(MessageResponse::from(message)),

        Err(SendMessageError::ChatNotFound) => {
            ApiResponse::not_found("CHAT_NOT_FOUND", "Chat not found")
        }

        Err(SendMessageError::NotParticipant) => ApiResponse::forbidden(
            "NOT_CHAT_PARTICIPANT",
            "Sender is not a participant of the chat",
        ),

        Err(SendMessageError::RepositoryError(e)) => {
            error!(error = %e, "Failed to send message");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::application::domain::entities::Message;
    use crate::chat::application::ports::incoming::use_cases::SendMessageUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};

    /// Echoes the validated content back as a stored message.
    #[derive(Clone)]
    struct EchoSend {
        error: Option<SendMessageError>,
    }

    #[async_trait]
    impl SendMessageUseCase for EchoSend {
        async fn execute(
            &self,
            chat_id: Uuid,
            sender_id: UserId,
            command: SendMessageCommand,
        ) -> Result<Message, SendMessageError> {
            if let Some(e) = &self.error {
                return Err(e.clone());
            }
            Ok(Message {
                id: Uuid::new_v4(),
                chat_id,
                sender_id,
                content: command.into_content(),
                sent_at: Utc::now(),
            })
        }
    }

    async fn call(mock: EchoSend, content: &str) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_send_message(mock)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(send_message_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/chats/{}/messages", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4()))
            .set_json(json!({ "content": content }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_send_message_trims_content() {
        let (status, body) = call(EchoSend { error: None }, "   hey  ").await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["content"], "hey");
    }

    #[actix_web::test]
    async fn test_blank_message_is_rejected() {
        let (status, body) = call(EchoSend { error: None }, "   ").await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_MESSAGE");
    }

    #[actix_web::test]
    async fn test_too_long_message_is_rejected() {
        let (status, body) = call(EchoSend { error: None }, &"x".repeat(501)).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_MESSAGE");
    }

    #[actix_web::test]
    async fn test_non_participant_is_forbidden() {
        let (status, body) = call(
            EchoSend {
                error: Some(SendMessageError::NotParticipant),
            },
            "hello",
        )
        .await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "NOT_CHAT_PARTICIPANT");
    }
}
