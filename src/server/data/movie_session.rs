//! Movie session data repository for database operations.
//!
//! Sessions are returned with their movie and hall. Relations for a batch of sessions are
//! fetched with one query per table, so listings cost a constant number of queries.

use std::collections::HashMap;

use chrono::{Days, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::movie::MovieRepository,
    model::{
        cinema_hall::CinemaHall,
        movie::Movie,
        movie_session::{MovieSession, MovieSessionFilter, MovieSessionParams, SeatAvailability},
    },
};

pub struct MovieSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new movie session
    pub async fn create(&self, params: MovieSessionParams) -> Result<MovieSession, DbErr> {
        let session = entity::movie_session::ActiveModel {
            show_time: ActiveValue::Set(params.show_time),
            movie_id: ActiveValue::Set(params.movie_id),
            cinema_hall_id: ActiveValue::Set(params.cinema_hall_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.load_one(session).await
    }

    /// Gets a session by id with its seat availability computed from sold tickets
    pub async fn get_by_id(&self, id: i32) -> Result<Option<MovieSession>, DbErr> {
        let Some(session) = entity::prelude::MovieSession::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let session = self.load_one(session).await?;

        let tickets = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::MovieSessionId.eq(id))
            .order_by_asc(entity::ticket::Column::Row)
            .order_by_asc(entity::ticket::Column::Seat)
            .all(self.db)
            .await?;
        let availability = SeatAvailability::compute(&session.cinema_hall, &tickets);

        Ok(Some(session.with_availability(availability)))
    }

    /// Gets sessions keyed by id, without availability
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, MovieSession>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sessions = entity::prelude::MovieSession::find()
            .filter(entity::movie_session::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(self
            .load(sessions)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect())
    }

    /// Gets sessions matching the filter ordered by show time.
    ///
    /// A `date` matches every show time from midnight of that day up to, but excluding,
    /// midnight of the next.
    pub async fn get_filtered(
        &self,
        filter: &MovieSessionFilter,
    ) -> Result<Vec<MovieSession>, DbErr> {
        let mut query = entity::prelude::MovieSession::find();

        if let Some(date) = filter.date {
            let start = date.and_time(NaiveTime::MIN);
            query = query.filter(entity::movie_session::Column::ShowTime.gte(start));
            if let Some(end) = start.checked_add_days(Days::new(1)) {
                query = query.filter(entity::movie_session::Column::ShowTime.lt(end));
            }
        }

        if let Some(movie_id) = filter.movie_id {
            query = query.filter(entity::movie_session::Column::MovieId.eq(movie_id));
        }

        let sessions = query
            .order_by_asc(entity::movie_session::Column::ShowTime)
            .order_by_asc(entity::movie_session::Column::Id)
            .all(self.db)
            .await?;

        self.load(sessions).await
    }

    /// Replaces a session's fields, returning `None` if the session does not exist
    pub async fn update(
        &self,
        id: i32,
        params: MovieSessionParams,
    ) -> Result<Option<MovieSession>, DbErr> {
        let Some(session) = entity::prelude::MovieSession::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::movie_session::ActiveModel = session.into();
        active.show_time = ActiveValue::Set(params.show_time);
        active.movie_id = ActiveValue::Set(params.movie_id);
        active.cinema_hall_id = ActiveValue::Set(params.cinema_hall_id);
        let updated = active.update(self.db).await?;

        Ok(Some(self.load_one(updated).await?))
    }

    /// Deletes a session, returning whether a row was removed. Its tickets cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MovieSession::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn load_one(&self, session: entity::movie_session::Model) -> Result<MovieSession, DbErr> {
        let id = session.id;

        self.load(vec![session])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(format!(
                "Relations of movie session {} not found",
                id
            )))
    }

    /// Attaches movies and halls to session rows, preserving the input order.
    async fn load(
        &self,
        sessions: Vec<entity::movie_session::Model>,
    ) -> Result<Vec<MovieSession>, DbErr> {
        if sessions.is_empty() {
            return Ok(Vec::new());
        }

        let movie_ids: Vec<i32> = sessions.iter().map(|s| s.movie_id).collect();
        let hall_ids: Vec<i32> = sessions.iter().map(|s| s.cinema_hall_id).collect();

        let movie_rows = entity::prelude::Movie::find()
            .filter(entity::movie::Column::Id.is_in(movie_ids))
            .all(self.db)
            .await?;
        let movies: HashMap<i32, Movie> = MovieRepository::new(self.db)
            .hydrate(movie_rows)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let halls: HashMap<i32, CinemaHall> = entity::prelude::CinemaHall::find()
            .filter(entity::cinema_hall::Column::Id.is_in(hall_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|h| (h.id, CinemaHall::from_entity(h)))
            .collect();

        sessions
            .into_iter()
            .map(|session| {
                let movie = movies
                    .get(&session.movie_id)
                    .cloned()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Movie with id {} not found for session {}",
                        session.movie_id, session.id
                    )))?;
                let hall = halls
                    .get(&session.cinema_hall_id)
                    .cloned()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Cinema hall with id {} not found for session {}",
                        session.cinema_hall_id, session.id
                    )))?;

                Ok(MovieSession::from_entity(session, movie, hall))
            })
            .collect()
    }
}
