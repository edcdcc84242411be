use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{genre::GenreRepository, is_unique_violation},
    error::{validation::ValidationError, AppError},
    model::genre::{Genre, GenreParams},
};

pub struct GenreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Genre>, AppError> {
        Ok(GenreRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Genre>, AppError> {
        Ok(GenreRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a genre, rejecting names already in use
    pub async fn create(&self, params: GenreParams) -> Result<Genre, AppError> {
        let repo = GenreRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(ValidationError::DuplicateGenre(params.name).into());
        }

        let name = params.name.clone();
        repo.create(params)
            .await
            .map_err(|err| duplicate_or_db_err(err, name))
    }

    /// Renames a genre, rejecting names used by another genre
    pub async fn update(&self, id: i32, params: GenreParams) -> Result<Option<Genre>, AppError> {
        let repo = GenreRepository::new(self.db);

        if let Some(existing) = repo.find_by_name(&params.name).await? {
            if existing.id != id {
                return Err(ValidationError::DuplicateGenre(params.name).into());
            }
        }

        let name = params.name.clone();
        repo.update(id, params)
            .await
            .map_err(|err| duplicate_or_db_err(err, name))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(GenreRepository::new(self.db).delete(id).await?)
    }
}

/// Maps a unique index hit on `genre.name` (a genre created concurrently) to a validation error.
fn duplicate_or_db_err(err: DbErr, name: String) -> AppError {
    if is_unique_violation(&err) {
        tracing::debug!("Genre name taken concurrently: {}", err);
        ValidationError::DuplicateGenre(name).into()
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn rejects_duplicate_genre_name() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Genre)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::genre::create_genre_named(db, "Drama").await.unwrap();

        let result = GenreService::new(db)
            .create(GenreParams {
                name: "Drama".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::DuplicateGenre(_)))
        ));
    }

    #[tokio::test]
    async fn allows_update_keeping_own_name() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Genre)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let genre = factory::genre::create_genre_named(db, "Drama").await.unwrap();

        let result = GenreService::new(db)
            .update(
                genre.id,
                GenreParams {
                    name: "Drama".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(result.map(|g| g.id), Some(genre.id));
    }

    #[tokio::test]
    async fn maps_unique_index_hit_to_duplicate_genre() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Genre)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::genre::create_genre_named(db, "Drama").await.unwrap();

        // Insert past the name pre-check, as a concurrent request would.
        let err = GenreRepository::new(db)
            .create(GenreParams {
                name: "Drama".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            duplicate_or_db_err(err, "Drama".to_string()),
            AppError::ValidationErr(ValidationError::DuplicateGenre(name)) if name == "Drama"
        ));
    }
}
