//! Actor data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::actor::{Actor, ActorParams};

pub struct ActorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new actor
    pub async fn create(&self, params: ActorParams) -> Result<Actor, DbErr> {
        let entity = entity::actor::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Actor::from_entity(entity))
    }

    /// Gets all actors ordered by id
    pub async fn get_all(&self) -> Result<Vec<Actor>, DbErr> {
        let actors = entity::prelude::Actor::find()
            .order_by_asc(entity::actor::Column::Id)
            .all(self.db)
            .await?;

        Ok(actors.into_iter().map(Actor::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Actor>, DbErr> {
        let actor = entity::prelude::Actor::find_by_id(id).one(self.db).await?;

        Ok(actor.map(Actor::from_entity))
    }

    /// Replaces an actor's names, returning `None` if the actor does not exist
    pub async fn update(&self, id: i32, params: ActorParams) -> Result<Option<Actor>, DbErr> {
        let Some(actor) = entity::prelude::Actor::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::actor::ActiveModel = actor.into();
        active.first_name = ActiveValue::Set(params.first_name);
        active.last_name = ActiveValue::Set(params.last_name);
        let updated = active.update(self.db).await?;

        Ok(Some(Actor::from_entity(updated)))
    }

    /// Deletes an actor, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Actor::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns the ids among `ids` that have no actor row
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<i32> = entity::prelude::Actor::find()
            .filter(entity::actor::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| a.id)
            .collect();

        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }
}
