use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cinema_hall::CinemaHallRepository, order::OrderRepository},
    error::{validation::ValidationError, AppError},
    model::cinema_hall::{CinemaHall, CinemaHallParams},
};

pub struct CinemaHallService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CinemaHallService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<CinemaHall>, AppError> {
        Ok(CinemaHallRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CinemaHall>, AppError> {
        Ok(CinemaHallRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, params: CinemaHallParams) -> Result<CinemaHall, AppError> {
        Ok(CinemaHallRepository::new(self.db).create(params).await?)
    }

    /// Replaces a hall's name and layout.
    ///
    /// # Returns
    /// - `Ok(Some(CinemaHall))` - Hall updated
    /// - `Ok(None)` - No hall with this id
    /// - `Err(AppError::ValidationErr(SoldSeatOutsideLayout))` - A ticket already sold for one
    ///   of the hall's sessions would fall outside the new layout
    pub async fn update(
        &self,
        id: i32,
        params: CinemaHallParams,
    ) -> Result<Option<CinemaHall>, AppError> {
        if let Some(ticket) = OrderRepository::new(self.db)
            .find_ticket_outside_layout(id, params.rows, params.seats_in_row)
            .await?
        {
            return Err(ValidationError::SoldSeatOutsideLayout {
                movie_session: ticket.movie_session_id,
                row: ticket.row,
                seat: ticket.seat,
            }
            .into());
        }

        Ok(CinemaHallRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(CinemaHallRepository::new(self.db).delete(id).await?)
    }
}
