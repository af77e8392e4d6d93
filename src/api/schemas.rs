use serde::Serialize;
use utoipa::ToSchema;

// OpenAPI views of the two shapes `shared::api::ApiResponse` serializes to.
// Handlers never build these; they only appear in `#[utoipa::path]` bodies.

/// `{"success": true, "data": ...}`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{"success": false, "error": {...}}`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable, upper snake case; clients branch on this
    #[schema(example = "NOT_CHAT_PARTICIPANT")]
    pub code: String,

    #[schema(example = "Sender is not a participant of the chat")]
    pub message: String,
}
