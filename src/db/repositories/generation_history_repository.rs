use crate::db::error::RepositoryError;
use crate::db::models::generation_history::{GenerationHistory, NewGenerationHistory};
use crate::db::schema::generation_history;
use diesel::prelude::*;

/// Storage access for generated avatars. Not routed over HTTP.
pub struct GenerationHistoryRepository;

impl GenerationHistoryRepository {
    pub fn create(
        conn: &mut PgConnection,
        entry: &NewGenerationHistory,
    ) -> Result<GenerationHistory, RepositoryError> {
        diesel::insert_into(generation_history::table)
            .values(entry)
            .returning(GenerationHistory::as_returning())
            .get_result(conn)
            .map_err(Into::into)
    }

    /// Entries recorded for `user_id`, newest first
    pub fn list_for_user(
        conn: &mut PgConnection,
        user_id: i32,
    ) -> Result<Vec<GenerationHistory>, RepositoryError> {
        generation_history::table
            .filter(generation_history::user_id.eq(user_id))
            .order((
                generation_history::created_at.desc(),
                generation_history::id.desc(),
            ))
            .select(GenerationHistory::as_select())
            .load(conn)
            .map_err(Into::into)
    }
}
