//! Genre data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::genre::{Genre, GenreParams};

pub struct GenreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new genre
    pub async fn create(&self, params: GenreParams) -> Result<Genre, DbErr> {
        let entity = entity::genre::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Genre::from_entity(entity))
    }

    /// Gets all genres ordered by id
    pub async fn get_all(&self) -> Result<Vec<Genre>, DbErr> {
        let genres = entity::prelude::Genre::find()
            .order_by_asc(entity::genre::Column::Id)
            .all(self.db)
            .await?;

        Ok(genres.into_iter().map(Genre::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Genre>, DbErr> {
        let genre = entity::prelude::Genre::find_by_id(id).one(self.db).await?;

        Ok(genre.map(Genre::from_entity))
    }

    /// Finds a genre by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Genre>, DbErr> {
        let genre = entity::prelude::Genre::find()
            .filter(entity::genre::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(genre.map(Genre::from_entity))
    }

    /// Replaces a genre's name, returning `None` if the genre does not exist
    pub async fn update(&self, id: i32, params: GenreParams) -> Result<Option<Genre>, DbErr> {
        let Some(genre) = entity::prelude::Genre::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::genre::ActiveModel = genre.into();
        active.name = ActiveValue::Set(params.name);
        let updated = active.update(self.db).await?;

        Ok(Some(Genre::from_entity(updated)))
    }

    /// Deletes a genre, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Genre::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns the ids among `ids` that have no genre row
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<i32> = entity::prelude::Genre::find()
            .filter(entity::genre::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| g.id)
            .collect();

        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }
}
