use crate::db::schema::generation_history;
use avatar_api::GenerationHistoryResponse;
use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};

/// `user_id` is not a foreign key: nothing stops it from pointing at a missing user.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = generation_history)]
pub struct NewGenerationHistory {
    pub user_id: Option<i32>,
    pub image_url: Option<String>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = generation_history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GenerationHistory {
    pub id: i32,
    pub user_id: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<GenerationHistory> for GenerationHistoryResponse {
    fn from(entry: GenerationHistory) -> Self {
        GenerationHistoryResponse {
            id: entry.id,
            user_id: entry.user_id,
            image_url: entry.image_url,
            created_at: entry.created_at,
        }
    }
}
