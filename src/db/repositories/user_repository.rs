use crate::db::error::RepositoryError;
use crate::db::models::user::{NewUser, User};
use crate::db::schema::users;
use diesel::prelude::*;

pub struct UserRepository;

impl UserRepository {
    /// Inserts a user; `id` and `created_at` come back from the database
    pub fn create(conn: &mut PgConnection, new_user: &NewUser) -> Result<User, RepositoryError> {
        diesel::insert_into(users::table)
            .values(new_user)
            .returning(User::as_returning())
            .get_result(conn)
            .map_err(Into::into)
    }

    /// Every user, in whatever order the storage returns them
    pub fn list(conn: &mut PgConnection) -> Result<Vec<User>, RepositoryError> {
        users::table
            .select(User::as_select())
            .load(conn)
            .map_err(Into::into)
    }
}
