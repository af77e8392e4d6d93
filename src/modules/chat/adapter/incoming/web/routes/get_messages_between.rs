use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::chat::application::ports::incoming::use_cases::GetMessagesBetweenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::chat_response::{message_list, MessageResponse};

/// Conversation with a user
#[utoipa::path(
    get,
    path = "/api/messages/between/{user_id}",
    tag = "messages",
    security(("BearerAuth" = [])),
    params(("user_id" = Uuid, Path, description = "The other participant")),
    responses(
        (status = 200, description = "Messages of the shared private chat, oldest first; empty when there is none", body = inline(SuccessResponse<Vec<MessageResponse>>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/messages/between/{user_id}")]
pub async fn get_messages_between_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .chat
        .get_messages_between
        .execute(UserId::from(user.user_id), UserId::from(path.into_inner()))
        .await
    {
        Ok(messages) => ApiResponse::success(message_list(messages)),

        Err(GetMessagesBetweenError::QueryError(e)) => {
            error!(error = %e, "Failed to load conversation");
            ApiResponse::internal_error()
        }
    }
}
