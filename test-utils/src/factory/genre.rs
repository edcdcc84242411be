//! Genre factory for creating test genre entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test genres.
pub struct GenreFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> GenreFactory<'a> {
    /// Creates a new GenreFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Genre {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Genre {}", next_id()),
        }
    }

    /// Sets the genre name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the genre entity into the database.
    pub async fn build(self) -> Result<entity::genre::Model, DbErr> {
        entity::genre::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a genre with default values.
pub async fn create_genre(db: &DatabaseConnection) -> Result<entity::genre::Model, DbErr> {
    GenreFactory::new(db).build().await
}

/// Creates a genre with a specific name.
///
/// Shorthand for `GenreFactory::new(db).name(name).build().await`.
pub async fn create_genre_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::genre::Model, DbErr> {
    GenreFactory::new(db).name(name).build().await
}
