// src/services/user_service.rs

use avatar_api::{UserCreate, UserResponse};
use diesel::PgConnection;

use crate::db::Database;
use crate::db::error::RepositoryError;
use crate::db::models::user::NewUser;
use crate::db::repositories::user_repository::UserRepository;
use crate::error::AppError;

pub struct UserService {
    database: Database,
}

impl UserService {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Inserts a user. Username and email uniqueness is left to the database.
    pub async fn create_user(&self, payload: UserCreate) -> Result<UserResponse, AppError> {
        let new_user = NewUser::from(payload);
        let user = self
            .with_connection(move |conn| UserRepository::create(conn, &new_user))
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(UserResponse::from(user))
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.with_connection(UserRepository::list).await?;

        tracing::debug!(count = users.len(), "Users listed");
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Runs `op` on a blocking thread with a connection checked out for its whole duration
    async fn with_connection<F, T>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut PgConnection) -> Result<T, RepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        let database = self.database.clone();
        let result = tokio::task::spawn_blocking(move || -> Result<T, RepositoryError> {
            let mut conn = database.connection()?;
            op(&mut *conn)
        })
        .await?;

        result.map_err(AppError::from)
    }
}
