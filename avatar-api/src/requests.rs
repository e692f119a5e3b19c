use serde::{Deserialize, Serialize};

// -------- REQUEST DTOs --------

/// Body of `POST /users/`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserCreate {
    pub username: String,
    pub email: String,
}
