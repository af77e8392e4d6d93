use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::community::application::ports::incoming::use_cases::{
    CreateCommunityCommand, CreateCommunityError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::community_response::CommunityResponse;
use super::map_field_error;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCommunityRequest {
    /// Trimmed; 1 to 20 characters
    #[schema(example = "rustaceans")]
    pub name: String,
    #[schema(example = "Everything Rust")]
    #[serde(default)]
    pub description: Option<String>,
}

/// Create a community
#[utoipa::path(
    post,
    path = "/api/communities",
    tag = "communities",
    security(("BearerAuth" = [])),
    request_body = CreateCommunityRequest,
    responses(
        (status = 201, description = "Created community; the caller is its admin and first member", body = inline(SuccessResponse<CommunityResponse>)),
        (status = 400, description = "Invalid name or description", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/communities")]
pub async fn create_community_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateCommunityRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match CreateCommunityCommand::new(&req.name, req.description) {
        Ok(cmd) => cmd,
        Err(e) => return map_field_error(e),
    };

    match data
        .community
        .create
        .execute(UserId::from(user.user_id), command)
        .await
    {
        Ok(community) => ApiResponse::created(CommunityResponse::from(community)),

        Err(CreateCommunityError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create community");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::application::domain::entities::Community;
    use crate::community::application::ports::incoming::use_cases::CreateCommunityUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::community;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockCreateCommunity {
        result: Result<Community, CreateCommunityError>,
    }

    #[async_trait]
    impl CreateCommunityUseCase for MockCreateCommunity {
        async fn execute(
            &self,
            _admin_id: UserId,
            _command: CreateCommunityCommand,
        ) -> Result<Community, CreateCommunityError> {
            self.result.clone()
        }
    }

    async fn call(mock: MockCreateCommunity, payload: Value) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_community(mock)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_community_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/communities")
            .insert_header(bearer(Uuid::new_v4()))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_create_community_success() {
        let admin = Uuid::new_v4();
        let (status, body) = call(
            MockCreateCommunity {
                result: Ok(community("rustaceans", admin)),
            },
            json!({ "name": "rustaceans", "description": "crabs" }),
        )
        .await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["name"], "rustaceans");
    }

    #[actix_web::test]
    async fn test_name_too_long_is_rejected() {
        let (status, body) = call(
            MockCreateCommunity {
                result: Err(CreateCommunityError::RepositoryError("unreachable".into())),
            },
            json!({ "name": "x".repeat(21) }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_COMMUNITY_NAME");
    }

    #[actix_web::test]
    async fn test_description_too_long_is_rejected() {
        let (status, body) = call(
            MockCreateCommunity {
                result: Err(CreateCommunityError::RepositoryError("unreachable".into())),
            },
            json!({ "name": "ok", "description": "d".repeat(501) }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_COMMUNITY_DESCRIPTION");
    }
}
