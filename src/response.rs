use avatar_api::AppResponse as ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Backend wrapper for `avatar_api::AppResponse` that adds axum integration.
///
/// ```rust,ignore
/// AppResponse::ok(users)
/// ```
pub struct AppResponse<T> {
    inner: ApiResponse<T>,
}

impl<T> AppResponse<T>
where
    T: Serialize,
{
    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self {
            inner: ApiResponse::ok(data),
        }
    }
}

impl<T> IntoResponse for AppResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.status.as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.inner.data {
            Some(data) => (status, Json(data)).into_response(),
            None => status.into_response(),
        }
    }
}
