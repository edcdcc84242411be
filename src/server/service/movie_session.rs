use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        cinema_hall::CinemaHallRepository, movie::MovieRepository,
        movie_session::MovieSessionRepository, order::OrderRepository,
    },
    error::{validation::ValidationError, AppError},
    model::movie_session::{MovieSession, MovieSessionFilter, MovieSessionParams},
};

pub struct MovieSessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieSessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists sessions matching the filter with movie and hall loaded
    pub async fn get_filtered(
        &self,
        filter: &MovieSessionFilter,
    ) -> Result<Vec<MovieSession>, AppError> {
        Ok(MovieSessionRepository::new(self.db)
            .get_filtered(filter)
            .await?)
    }

    /// Gets a session with seat availability
    pub async fn get_by_id(&self, id: i32) -> Result<Option<MovieSession>, AppError> {
        Ok(MovieSessionRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, params: MovieSessionParams) -> Result<MovieSession, AppError> {
        self.check_references(&params).await?;

        Ok(MovieSessionRepository::new(self.db).create(params).await?)
    }

    /// Replaces a session's movie, hall and show time.
    ///
    /// Moving the session to another hall fails with `SoldSeatOutsideLayout` when a ticket
    /// already sold for it does not exist in the target hall.
    pub async fn update(
        &self,
        id: i32,
        params: MovieSessionParams,
    ) -> Result<Option<MovieSession>, AppError> {
        self.check_references(&params).await?;
        self.check_sold_seats_fit(id, params.cinema_hall_id).await?;

        Ok(MovieSessionRepository::new(self.db)
            .update(id, params)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(MovieSessionRepository::new(self.db).delete(id).await?)
    }

    async fn check_sold_seats_fit(&self, id: i32, cinema_hall_id: i32) -> Result<(), AppError> {
        let Some(hall) = CinemaHallRepository::new(self.db)
            .get_by_id(cinema_hall_id)
            .await?
        else {
            return Ok(());
        };

        let tickets = OrderRepository::new(self.db)
            .get_tickets_for_sessions(&[id])
            .await?;
        if let Some(ticket) = tickets
            .into_iter()
            .find(|t| hall.check_place(t.row, t.seat).is_err())
        {
            return Err(ValidationError::SoldSeatOutsideLayout {
                movie_session: id,
                row: ticket.row,
                seat: ticket.seat,
            }
            .into());
        }

        Ok(())
    }

    async fn check_references(&self, params: &MovieSessionParams) -> Result<(), AppError> {
        if !MovieRepository::new(self.db).exists(params.movie_id).await? {
            return Err(ValidationError::UnknownReference {
                kind: "Movie",
                id: params.movie_id,
            }
            .into());
        }

        if !CinemaHallRepository::new(self.db)
            .exists(params.cinema_hall_id)
            .await?
        {
            return Err(ValidationError::UnknownReference {
                kind: "Cinema hall",
                id: params.cinema_hall_id,
            }
            .into());
        }

        Ok(())
    }
}
