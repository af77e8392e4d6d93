use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::chat::application::ports::incoming::use_cases::DeleteMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a message
#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = "messages",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Message ID")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not the sender", body = ErrorResponse),
        (status = 404, description = "Message not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/messages/{id}")]
pub async fn delete_message_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .chat
        .delete_message
        .execute(path.into_inner(), UserId::from(user.user_id))
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }

        Err(DeleteMessageError::NotSender) => ApiResponse::forbidden(
            "NOT_MESSAGE_SENDER",
            "Only the sender can delete the message",
        ),

        Err(DeleteMessageError::RepositoryError(e)) => {
            error!(error = %e, "Failed to delete message");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::application::ports::incoming::use_cases::DeleteMessageUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockDeleteMessage {
        result: Result<(), DeleteMessageError>,
    }

    #[async_trait]
    impl DeleteMessageUseCase for MockDeleteMessage {
        async fn execute(
            &self,
            _message_id: Uuid,
            _actor_id: UserId,
        ) -> Result<(), DeleteMessageError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_delete_message_statuses() {
        for (result, expected) in [
            (Ok(()), 204),
            (Err(DeleteMessageError::NotFound), 404),
            (Err(DeleteMessageError::NotSender), 403),
        ] {
            let app_state = TestAppStateBuilder::default()
                .with_delete_message(MockDeleteMessage { result })
                .build();
            let app = test::init_service(
                App::new()
                    .app_data(app_state)
                    .app_data(web::Data::new(test_token_provider()))
                    .service(delete_message_handler),
            )
            .await;

            let req = test::TestRequest::delete()
                .uri(&format!("/api/messages/{}", Uuid::new_v4()))
                .insert_header(bearer(Uuid::new_v4()))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status().as_u16(), expected);
        }
    }
}
