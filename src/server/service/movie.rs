use sea_orm::DatabaseConnection;

use crate::server::{
    data::{actor::ActorRepository, genre::GenreRepository, movie::MovieRepository},
    error::{validation::ValidationError, AppError},
    model::movie::{Movie, MovieFilter, MovieParams},
};

pub struct MovieService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists movies matching the filter
    pub async fn get_filtered(&self, filter: &MovieFilter) -> Result<Vec<Movie>, AppError> {
        Ok(MovieRepository::new(self.db).get_filtered(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Movie>, AppError> {
        Ok(MovieRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, params: MovieParams) -> Result<Movie, AppError> {
        self.check_references(&params).await?;

        Ok(MovieRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: MovieParams) -> Result<Option<Movie>, AppError> {
        self.check_references(&params).await?;

        Ok(MovieRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(MovieRepository::new(self.db).delete(id).await?)
    }

    /// Ensures every referenced genre and actor exists
    async fn check_references(&self, params: &MovieParams) -> Result<(), AppError> {
        let missing_genres = GenreRepository::new(self.db)
            .find_missing(&params.genre_ids)
            .await?;
        if let Some(id) = missing_genres.first() {
            return Err(ValidationError::UnknownReference {
                kind: "Genre",
                id: *id,
            }
            .into());
        }

        let missing_actors = ActorRepository::new(self.db)
            .find_missing(&params.actor_ids)
            .await?;
        if let Some(id) = missing_actors.first() {
            return Err(ValidationError::UnknownReference {
                kind: "Actor",
                id: *id,
            }
            .into());
        }

        Ok(())
    }
}
