//! Actor factory for creating test actor entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test actors.
///
/// # Example
///
/// ```rust,ignore
/// let actor = ActorFactory::new(&db).first_name("John").last_name("Doe").build().await?;
/// ```
pub struct ActorFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
}

impl<'a> ActorFactory<'a> {
    /// Creates a new ActorFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First{id}"`
    /// - last_name: `"Last{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
        }
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Builds and inserts the actor entity into the database.
    pub async fn build(self) -> Result<entity::actor::Model, DbErr> {
        entity::actor::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an actor with default values.
pub async fn create_actor(db: &DatabaseConnection) -> Result<entity::actor::Model, DbErr> {
    ActorFactory::new(db).build().await
}

/// Creates an actor with the given first and last name.
pub async fn create_actor_named(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
) -> Result<entity::actor::Model, DbErr> {
    ActorFactory::new(db)
        .first_name(first_name)
        .last_name(last_name)
        .build()
        .await
}
