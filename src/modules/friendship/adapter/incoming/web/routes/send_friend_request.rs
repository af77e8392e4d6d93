use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::ports::incoming::use_cases::SendFriendRequestError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::friendship_response::FriendshipResponse;

/// Send a friend request
#[utoipa::path(
    post,
    path = "/api/friendships/requests/{receiver_id}",
    tag = "friendships",
    security(("BearerAuth" = [])),
    params(("receiver_id" = Uuid, Path, description = "User ID of the receiver")),
    responses(
        (status = 201, description = "Pending friendship", body = inline(SuccessResponse<FriendshipResponse>)),
        (status = 400, description = "Request to self or friendship already active", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Receiver not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/friendships/requests/{receiver_id}")]
pub async fn send_friend_request_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let receiver_id = UserId::from(path.into_inner());

    match data
        .friendship
        .send_request
        .execute(UserId::from(user.user_id), receiver_id)
        .await
    {
        Ok(friendship) => ApiResponse::created(FriendshipResponse::from(friendship)),

        Err(SendFriendRequestError::SelfRequest) => ApiResponse::bad_request(
            "SELF_FRIEND_REQUEST",
            "Cannot send a friend request to yourself",
        ),

        Err(SendFriendRequestError::ReceiverNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(SendFriendRequestError::AlreadyExists) => ApiResponse::bad_request(
            "FRIENDSHIP_ALREADY_EXISTS",
            "A pending or accepted friendship already exists",
        ),

        Err(SendFriendRequestError::RepositoryError(e)) => {
            error!(error = %e, "Failed to send friend request");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friendship::application::domain::entities::{Friendship, FriendshipStatus};
    use crate::friendship::application::ports::incoming::use_cases::SendFriendRequestUseCase;
    use crate::shared::api::custom_path_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::friendship;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    #[derive(Clone)]
    struct MockSendRequest {
        result: Result<Friendship, SendFriendRequestError>,
    }

    #[async_trait]
    impl SendFriendRequestUseCase for MockSendRequest {
        async fn execute(
            &self,
            _requester_id: UserId,
            _receiver_id: UserId,
        ) -> Result<Friendship, SendFriendRequestError> {
            self.result.clone()
        }
    }

    async fn call(mock: MockSendRequest, uri: &str) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_send_friend_request(mock)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .app_data(custom_path_config())
                .service(send_friend_request_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_send_request_created() {
        let receiver = Uuid::new_v4();
        let mock = MockSendRequest {
            result: Ok(friendship(Uuid::new_v4(), receiver, FriendshipStatus::Pending)),
        };

        let (status, body) = call(mock, &format!("/api/friendships/requests/{}", receiver)).await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["status"], "PENDING");
        assert_eq!(body["data"]["receiver_id"], receiver.to_string());
    }

    #[actix_web::test]
    async fn test_send_request_to_self() {
        let mock = MockSendRequest {
            result: Err(SendFriendRequestError::SelfRequest),
        };

        let (status, body) =
            call(mock, &format!("/api/friendships/requests/{}", Uuid::new_v4())).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "SELF_FRIEND_REQUEST");
    }

    #[actix_web::test]
    async fn test_send_request_duplicate() {
        let mock = MockSendRequest {
            result: Err(SendFriendRequestError::AlreadyExists),
        };

        let (status, body) =
            call(mock, &format!("/api/friendships/requests/{}", Uuid::new_v4())).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "FRIENDSHIP_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_send_request_unknown_receiver() {
        let mock = MockSendRequest {
            result: Err(SendFriendRequestError::ReceiverNotFound),
        };

        let (status, body) =
            call(mock, &format!("/api/friendships/requests/{}", Uuid::new_v4())).await;

        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_send_request_malformed_id() {
        let mock = MockSendRequest {
            result: Err(SendFriendRequestError::SelfRequest),
        };

        let (status, body) = call(mock, "/api/friendships/requests/not-a-uuid").await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_PATH_PARAMETER");
    }
}
