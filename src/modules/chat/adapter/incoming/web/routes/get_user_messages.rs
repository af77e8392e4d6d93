use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::chat::application::ports::incoming::use_cases::GetUserMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::chat_response::{message_list, MessageResponse};

/// Messages of all my chats
#[utoipa::path(
    get,
    path = "/api/messages/mine",
    tag = "messages",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Messages, oldest first", body = inline(SuccessResponse<Vec<MessageResponse>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/messages/mine")]
pub async fn get_user_messages_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .chat
        .get_user_messages
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(messages) => ApiResponse::success(message_list(messages)),

        Err(GetUserMessagesError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load messages");
            ApiResponse::internal_error()
        }
    }
}
