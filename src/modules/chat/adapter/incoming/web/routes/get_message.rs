use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::chat::application::ports::incoming::use_cases::GetMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::chat_response::MessageResponse;

/// Message by id
#[utoipa::path(
    get,
    path = "/api/messages/{id}",
    tag = "messages",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Message not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/messages/{id}")]
pub async fn get_message_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.chat.get_message.execute(path.into_inner()).await {
        Ok(message) => ApiResponse::success(MessageResponse::from(message)),

        Err(GetMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }

        Err(GetMessageError::QueryError(e)) => {
            error!(error = %e, "Failed to load message");
            ApiResponse::internal_error()
        }
    }
}
