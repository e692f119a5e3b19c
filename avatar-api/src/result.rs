use serde::{Deserialize, Serialize};

/// Success statuses the backend emits (every endpoint answers 200).
/// Kept independent of any HTTP crate so clients can share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    Ok,
}

impl StatusCode {
    /// Numeric HTTP status
    #[must_use]
    pub fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
        }
    }
}

/// Generic API response wrapper
///
/// The backend wraps this in a type that implements axum's `IntoResponse`.
///
/// ```rust
/// use avatar_api::{AppResponse, StatusCode};
///
/// let response = AppResponse::ok(vec![1, 2, 3]);
/// assert_eq!(response.status, StatusCode::Ok);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status: StatusCode,
}

impl<T> AppResponse<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            data: Some(data),
        }
    }

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::Ok, data)
    }
}
