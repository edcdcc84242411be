use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the caller's identity from the session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Gets the authenticated user, if any.
    ///
    /// An id in the session that no longer matches a user is treated as no identity.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Session holds the id of an existing user
    /// - `Ok(None)` - Anonymous caller or stale session
    /// - `Err(AppError)` - Session store or database failure
    pub async fn identity(&self) -> Result<Option<User>, AppError> {
        match self.resolve().await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(err)) => {
                tracing::debug!("Treating request as anonymous: {}", err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Gets the authenticated user or fails with 401.
    ///
    /// # Returns
    /// - `Ok(User)` - Session holds the id of an existing user
    /// - `Err(AppError::AuthErr(_))` - No user in session or the user no longer exists
    /// - `Err(AppError)` - Session store or database failure
    pub async fn require(&self) -> Result<User, AppError> {
        self.resolve().await
    }

    async fn resolve(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
