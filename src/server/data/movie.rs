//! Movie data repository for database operations.
//!
//! Movies are always returned with their genres and actors. Relations for a batch of
//! movies are loaded with one query per relation instead of one per movie.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, TransactionTrait,
};

use crate::server::model::{
    actor::Actor,
    genre::Genre,
    movie::{Movie, MovieFilter, MovieParams},
};

pub struct MovieRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a movie and links its genres and actors in one transaction
    pub async fn create(&self, params: MovieParams) -> Result<Movie, DbErr> {
        let txn = self.db.begin().await?;

        let movie = entity::movie::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            duration: ActiveValue::Set(params.duration),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        link_relations(&txn, movie.id, &params.genre_ids, &params.actor_ids).await?;

        txn.commit().await?;

        self.get_by_id(movie.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Movie with id {} not found after creation",
                movie.id
            )))
    }

    /// Gets a movie by id with its genres and actors
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Movie>, DbErr> {
        let Some(movie) = entity::prelude::Movie::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![movie]).await?.pop())
    }

    /// Gets the movies matching every present filter dimension, ordered by id.
    ///
    /// Actor and genre matches are expressed as `id IN (subquery)` so a movie matching
    /// several listed values is returned only once.
    pub async fn get_filtered(&self, filter: &MovieFilter) -> Result<Vec<Movie>, DbErr> {
        let mut query = entity::prelude::Movie::find();

        if let Some(actors) = &filter.actors {
            let mut names = Condition::any();
            for (first_name, last_name) in actors {
                names = names.add(
                    Condition::all()
                        .add(entity::actor::Column::FirstName.eq(first_name.as_str()))
                        .add(entity::actor::Column::LastName.eq(last_name.as_str())),
                );
            }

            query = query.filter(
                entity::movie::Column::Id.in_subquery(
                    entity::prelude::MovieActor::find()
                        .select_only()
                        .column(entity::movie_actor::Column::MovieId)
                        .inner_join(entity::prelude::Actor)
                        .filter(names)
                        .into_query(),
                ),
            );
        }

        if let Some(genres) = &filter.genres {
            query = query.filter(
                entity::movie::Column::Id.in_subquery(
                    entity::prelude::MovieGenre::find()
                        .select_only()
                        .column(entity::movie_genre::Column::MovieId)
                        .inner_join(entity::prelude::Genre)
                        .filter(entity::genre::Column::Name.is_in(genres.iter().cloned()))
                        .into_query(),
                ),
            );
        }

        if let Some(title) = &filter.title {
            query = query.filter(entity::movie::Column::Title.contains(title));
        }

        let movies = query
            .order_by_asc(entity::movie::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(movies).await
    }

    /// Replaces a movie's fields and relations, returning `None` if the movie does not exist
    pub async fn update(&self, id: i32, params: MovieParams) -> Result<Option<Movie>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(movie) = entity::prelude::Movie::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::movie::ActiveModel = movie.into();
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        active.duration = ActiveValue::Set(params.duration);
        active.update(&txn).await?;

        entity::prelude::MovieGenre::delete_many()
            .filter(entity::movie_genre::Column::MovieId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::MovieActor::delete_many()
            .filter(entity::movie_actor::Column::MovieId.eq(id))
            .exec(&txn)
            .await?;
        link_relations(&txn, id, &params.genre_ids, &params.actor_ids).await?;

        txn.commit().await?;

        self.get_by_id(id).await
    }

    /// Deletes a movie, returning whether a row was removed.
    ///
    /// Genre and actor links, sessions and their tickets cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Movie::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let movie = entity::prelude::Movie::find_by_id(id).one(self.db).await?;

        Ok(movie.is_some())
    }

    /// Attaches genres and actors to movie rows, preserving the input order.
    pub async fn hydrate(&self, movies: Vec<entity::movie::Model>) -> Result<Vec<Movie>, DbErr> {
        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = movies.iter().map(|m| m.id).collect();

        let mut genres: HashMap<i32, Vec<Genre>> = HashMap::new();
        let genre_links = entity::prelude::MovieGenre::find()
            .filter(entity::movie_genre::Column::MovieId.is_in(ids.clone()))
            .find_also_related(entity::prelude::Genre)
            .order_by_asc(entity::genre::Column::Id)
            .all(self.db)
            .await?;
        for (link, genre) in genre_links {
            if let Some(genre) = genre {
                genres
                    .entry(link.movie_id)
                    .or_default()
                    .push(Genre::from_entity(genre));
            }
        }

        let mut actors: HashMap<i32, Vec<Actor>> = HashMap::new();
        let actor_links = entity::prelude::MovieActor::find()
            .filter(entity::movie_actor::Column::MovieId.is_in(ids))
            .find_also_related(entity::prelude::Actor)
            .order_by_asc(entity::actor::Column::Id)
            .all(self.db)
            .await?;
        for (link, actor) in actor_links {
            if let Some(actor) = actor {
                actors
                    .entry(link.movie_id)
                    .or_default()
                    .push(Actor::from_entity(actor));
            }
        }

        Ok(movies
            .into_iter()
            .map(|movie| {
                let movie_genres = genres.remove(&movie.id).unwrap_or_default();
                let movie_actors = actors.remove(&movie.id).unwrap_or_default();
                Movie::from_entity(movie, movie_genres, movie_actors)
            })
            .collect())
    }
}

/// Inserts join rows linking a movie to genres and actors.
async fn link_relations<C: ConnectionTrait>(
    conn: &C,
    movie_id: i32,
    genre_ids: &[i32],
    actor_ids: &[i32],
) -> Result<(), DbErr> {
    if !genre_ids.is_empty() {
        entity::prelude::MovieGenre::insert_many(genre_ids.iter().map(|genre_id| {
            entity::movie_genre::ActiveModel {
                movie_id: ActiveValue::Set(movie_id),
                genre_id: ActiveValue::Set(*genre_id),
            }
        }))
        .exec_without_returning(conn)
        .await?;
    }

    if !actor_ids.is_empty() {
        entity::prelude::MovieActor::insert_many(actor_ids.iter().map(|actor_id| {
            entity::movie_actor::ActiveModel {
                movie_id: ActiveValue::Set(movie_id),
                actor_id: ActiveValue::Set(*actor_id),
            }
        }))
        .exec_without_returning(conn)
        .await?;
    }

    Ok(())
}
