use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health,
        crate::handlers::user::create_user,
        crate::handlers::user::list_users,
        crate::handlers::upload::upload_image,
    ),
    components(schemas(
        avatar_api::UserCreate,
        avatar_api::UserResponse,
        avatar_api::UploadResponse,
        avatar_api::ErrorResponse,
        crate::handlers::health::HealthResponse,
        crate::handlers::upload::UploadImageForm,
    )),
    tags(
        (name = "Health"),
        (name = "Users"),
        (name = "Images"),
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
