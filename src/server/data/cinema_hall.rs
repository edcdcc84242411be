//! Cinema hall data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::cinema_hall::{CinemaHall, CinemaHallParams};

pub struct CinemaHallRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CinemaHallRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new cinema hall
    pub async fn create(&self, params: CinemaHallParams) -> Result<CinemaHall, DbErr> {
        let entity = entity::cinema_hall::ActiveModel {
            name: ActiveValue::Set(params.name),
            rows: ActiveValue::Set(params.rows),
            seats_in_row: ActiveValue::Set(params.seats_in_row),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CinemaHall::from_entity(entity))
    }

    /// Gets all cinema halls ordered by id
    pub async fn get_all(&self) -> Result<Vec<CinemaHall>, DbErr> {
        let halls = entity::prelude::CinemaHall::find()
            .order_by_asc(entity::cinema_hall::Column::Id)
            .all(self.db)
            .await?;

        Ok(halls.into_iter().map(CinemaHall::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CinemaHall>, DbErr> {
        let hall = entity::prelude::CinemaHall::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(hall.map(CinemaHall::from_entity))
    }

    /// Replaces a hall's name and layout, returning `None` if the hall does not exist
    pub async fn update(
        &self,
        id: i32,
        params: CinemaHallParams,
    ) -> Result<Option<CinemaHall>, DbErr> {
        let Some(hall) = entity::prelude::CinemaHall::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::cinema_hall::ActiveModel = hall.into();
        active.name = ActiveValue::Set(params.name);
        active.rows = ActiveValue::Set(params.rows);
        active.seats_in_row = ActiveValue::Set(params.seats_in_row);
        let updated = active.update(self.db).await?;

        Ok(Some(CinemaHall::from_entity(updated)))
    }

    /// Deletes a hall, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CinemaHall::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::CinemaHall::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
