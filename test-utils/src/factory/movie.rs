//! Movie factory for creating test movie entities with genre and actor links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test movies.
///
/// Genre and actor ids passed to the factory are linked through the join tables
/// after the movie is inserted.
///
/// # Example
///
/// ```rust,ignore
/// let movie = MovieFactory::new(&db)
///     .title("Inception")
///     .genres(vec![drama.id])
///     .actors(vec![actor.id])
///     .build()
///     .await?;
/// ```
pub struct MovieFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    duration: i32,
    genres: Vec<i32>,
    actors: Vec<i32>,
}

impl<'a> MovieFactory<'a> {
    /// Creates a new MovieFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Movie {id}"`
    /// - description: `"Test movie description"`
    /// - duration: `120`
    /// - no genres or actors
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Movie {}", next_id()),
            description: "Test movie description".to_string(),
            duration: 120,
            genres: Vec::new(),
            actors: Vec::new(),
        }
    }

    /// Sets the movie title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the movie description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the running time in minutes.
    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the genre ids to link.
    pub fn genres(mut self, genres: Vec<i32>) -> Self {
        self.genres = genres;
        self
    }

    /// Sets the actor ids to link.
    pub fn actors(mut self, actors: Vec<i32>) -> Self {
        self.actors = actors;
        self
    }

    /// Builds and inserts the movie and its genre/actor links.
    ///
    /// # Returns
    /// - `Ok(entity::movie::Model)` - Created movie entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::movie::Model, DbErr> {
        let movie = entity::movie::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            duration: ActiveValue::Set(self.duration),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for genre_id in self.genres {
            entity::movie_genre::ActiveModel {
                movie_id: ActiveValue::Set(movie.id),
                genre_id: ActiveValue::Set(genre_id),
            }
            .insert(self.db)
            .await?;
        }

        for actor_id in self.actors {
            entity::movie_actor::ActiveModel {
                movie_id: ActiveValue::Set(movie.id),
                actor_id: ActiveValue::Set(actor_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(movie)
    }
}

/// Creates a movie with default values and no genres or actors.
pub async fn create_movie(db: &DatabaseConnection) -> Result<entity::movie::Model, DbErr> {
    MovieFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};
    use entity::prelude::*;
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    #[tokio::test]
    async fn links_genres_and_actors() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_movie_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let genre = factory::genre::create_genre(db).await?;
        let actor = factory::actor::create_actor(db).await?;

        let movie = MovieFactory::new(db)
            .genres(vec![genre.id])
            .actors(vec![actor.id])
            .build()
            .await?;

        let genre_links = MovieGenre::find()
            .filter(entity::movie_genre::Column::MovieId.eq(movie.id))
            .count(db)
            .await?;
        let actor_links = MovieActor::find()
            .filter(entity::movie_actor::Column::MovieId.eq(movie.id))
            .count(db)
            .await?;

        assert_eq!(genre_links, 1);
        assert_eq!(actor_links, 1);

        Ok(())
    }
}
