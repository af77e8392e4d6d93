use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::chat::application::ports::incoming::use_cases::DeleteChatError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a chat
#[utoipa::path(
    delete,
    path = "/api/chats/{id}",
    tag = "chats",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Chat ID")),
    responses(
        (status = 204, description = "Chat and its messages deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not a participant", body = ErrorResponse),
        (status = 404, description = "Chat not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/chats/{id}")]
pub async fn delete_chat_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let chat_id = path.into_inner();

    match data
        .chat
        .delete_chat
        .execute(chat_id, UserId::from(user.user_id))
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteChatError::NotFound) => ApiResponse::not_found("CHAT_NOT_FOUND", "Chat not found"),

        Err(DeleteChatError::NotParticipant) => ApiResponse::forbidden(
            "NOT_CHAT_PARTICIPANT",
            "Only a participant can delete the chat",
        ),

        Err(DeleteChatError::RepositoryError(e)) => {
            error!(chat_id = %chat_id, error = %e, "Failed to delete chat");
            ApiResponse::internal_error()
        }
    }
}
