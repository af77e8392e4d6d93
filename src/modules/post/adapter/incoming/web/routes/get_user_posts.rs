use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::map_user_posts_error;
use super::post_response::{post_list, PostResponse};

/// Posts of a user
#[utoipa::path(
    get,
    path = "/api/posts/user/{user_id}",
    tag = "posts",
    security(("BearerAuth" = [])),
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Posts of the user", body = inline(SuccessResponse<Vec<PostResponse>>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts/user/{user_id}")]
pub async fn get_user_posts_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .post
        .get_by_author
        .execute(UserId::from(path.into_inner()))
        .await
    {
        Ok(posts) => ApiResponse::success(post_list(posts)),
        Err(e) => map_user_posts_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::application::domain::entities::Post;
    use crate::post::application::ports::incoming::use_cases::{
        GetUserPostsError, GetUserPostsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::post;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    #[derive(Clone)]
    struct MockUserPosts {
        result: Result<Vec<Post>, GetUserPostsError>,
    }

    #[async_trait]
    impl GetUserPostsUseCase for MockUserPosts {
        async fn execute(&self, _author_id: UserId) -> Result<Vec<Post>, GetUserPostsError> {
            self.result.clone()
        }
    }

    async fn call(mock: MockUserPosts) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_get_user_posts(mock)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(get_user_posts_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/user/{}", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_user_posts_listed() {
        let author = Uuid::new_v4();
        let (status, body) = call(MockUserPosts {
            result: Ok(vec![post(author, "b"), post(author, "a")]),
        })
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_unknown_user_is_not_found() {
        let (status, body) = call(MockUserPosts {
            result: Err(GetUserPostsError::UserNotFound),
        })
        .await;

        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }
}
