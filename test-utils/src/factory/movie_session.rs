//! Movie session factory for creating test session entities.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test movie sessions.
pub struct MovieSessionFactory<'a> {
    db: &'a DatabaseConnection,
    movie_id: i32,
    cinema_hall_id: i32,
    show_time: NaiveDateTime,
}

impl<'a> MovieSessionFactory<'a> {
    /// Creates a new MovieSessionFactory with default values.
    ///
    /// Defaults:
    /// - show_time: `2026-06-15 19:30:00`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `movie_id` - Movie shown in the session
    /// - `cinema_hall_id` - Hall the session takes place in
    pub fn new(db: &'a DatabaseConnection, movie_id: i32, cinema_hall_id: i32) -> Self {
        Self {
            db,
            movie_id,
            cinema_hall_id,
            show_time: default_show_time(),
        }
    }

    /// Sets the show time.
    pub fn show_time(mut self, show_time: NaiveDateTime) -> Self {
        self.show_time = show_time;
        self
    }

    /// Builds and inserts the movie session entity into the database.
    pub async fn build(self) -> Result<entity::movie_session::Model, DbErr> {
        entity::movie_session::ActiveModel {
            show_time: ActiveValue::Set(self.show_time),
            movie_id: ActiveValue::Set(self.movie_id),
            cinema_hall_id: ActiveValue::Set(self.cinema_hall_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

fn default_show_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, 15)
        .and_then(|d| d.and_hms_opt(19, 30, 0))
        .unwrap_or_default()
}

/// Creates a movie session with the default show time.
pub async fn create_movie_session(
    db: &DatabaseConnection,
    movie_id: i32,
    cinema_hall_id: i32,
) -> Result<entity::movie_session::Model, DbErr> {
    MovieSessionFactory::new(db, movie_id, cinema_hall_id)
        .build()
        .await
}
