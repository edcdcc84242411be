use sea_orm::DatabaseConnection;

use crate::server::{
    data::actor::ActorRepository,
    error::AppError,
    model::actor::{Actor, ActorParams},
};

pub struct ActorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Actor>, AppError> {
        Ok(ActorRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Actor>, AppError> {
        Ok(ActorRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, params: ActorParams) -> Result<Actor, AppError> {
        Ok(ActorRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: ActorParams) -> Result<Option<Actor>, AppError> {
        Ok(ActorRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ActorRepository::new(self.db).delete(id).await?)
    }
}
