use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of a user. `created_at` is a storage detail and stays out of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// Echo returned by the image upload placeholder
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UploadResponse {
    pub filename: String,
}

/// Wire shape of a generation history entry.
/// No endpoint serves it yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenerationHistoryResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
