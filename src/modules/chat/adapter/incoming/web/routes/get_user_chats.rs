use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::chat::application::ports::incoming::use_cases::GetUserChatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::chat_response::ChatResponse;

/// My chats
#[utoipa::path(
    get,
    path = "/api/chats",
    tag = "chats",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Chats with their participant ids", body = inline(SuccessResponse<Vec<ChatResponse>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/chats")]
pub async fn get_user_chats_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .chat
        .get_user_chats
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(chats) => ApiResponse::success(
            chats.into_iter().map(ChatResponse::from).collect::<Vec<_>>(),
        ),

        Err(GetUserChatsError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load chats");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::application::domain::entities::{Chat, ChatType};
    use crate::chat::application::ports::incoming::use_cases::GetUserChatsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::chat;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockGetChats {
        result: Result<Vec<Chat>, GetUserChatsError>,
    }

    #[async_trait]
    impl GetUserChatsUseCase for MockGetChats {
        async fn execute(&self, _user_id: UserId) -> Result<Vec<Chat>, GetUserChatsError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_get_chats_and_internal_error() {
        let me = Uuid::new_v4();
        for (result, expected) in [
            (Ok(vec![chat(ChatType::Private, &[me, Uuid::new_v4()])]), 200),
            (Err(GetUserChatsError::QueryError("db down".into())), 500),
        ] {
            let app_state = TestAppStateBuilder::default()
                .with_get_user_chats(MockGetChats { result })
                .build();
            let app = test::init_service(
                App::new()
                    .app_data(app_state)
                    .app_data(web::Data::new(test_token_provider()))
                    .service(get_user_chats_handler),
            )
            .await;

            let req = test::TestRequest::get()
                .uri("/api/chats")
                .insert_header(bearer(me))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), expected);

            let body: Value = test::read_body_json(resp).await;
            if expected == 500 {
                assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
                assert_eq!(body["error"]["message"], "An unexpected error occurred");
            } else {
                assert_eq!(body["data"].as_array().unwrap().len(), 1);
            }
        }
    }
}
