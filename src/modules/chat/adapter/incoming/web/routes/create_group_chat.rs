use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::chat::application::ports::incoming::use_cases::{
    CreateGroupChatCommand, CreateGroupChatError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::chat_response::ChatResponse;

/// Duplicates are ignored and unknown users are dropped; the caller is not added implicitly.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateGroupChatRequest {
    pub participant_ids: Vec<Uuid>,
}

/// Create a group chat
#[utoipa::path(
    post,
    path = "/api/chats/group",
    tag = "chats",
    security(("BearerAuth" = [])),
    request_body = CreateGroupChatRequest,
    responses(
        (status = 201, description = "Group chat", body = inline(SuccessResponse<ChatResponse>)),
        (status = 400, description = "Fewer than two known participants", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/chats/group")]
pub async fn create_group_chat_handler(
    _user: AuthenticatedUser,
    req: web::Json<CreateGroupChatRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateGroupChatCommand::new(req.into_inner().participant_ids) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("NOT_ENOUGH_PARTICIPANTS", &e.to_string()),
    };

    match data.chat.create_group.execute(command).await {
        Ok(chat) => ApiResponse::created(ChatResponse::from(chat)),

        Err(e @ CreateGroupChatError::NotEnoughParticipants) => {
            ApiResponse::bad_request("NOT_ENOUGH_PARTICIPANTS", &e.to_string())
        }

        Err(CreateGroupChatError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create group chat");
            ApiResponse::internal_error()
        }
    }
}
