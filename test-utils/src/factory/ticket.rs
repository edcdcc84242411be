//! Ticket factory for creating test ticket entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    movie_session_id: i32,
    order_id: i32,
    row: i32,
    seat: i32,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory for row 1, seat 1.
    pub fn new(db: &'a DatabaseConnection, movie_session_id: i32, order_id: i32) -> Self {
        Self {
            db,
            movie_session_id,
            order_id,
            row: 1,
            seat: 1,
        }
    }

    /// Sets the row number.
    pub fn row(mut self, row: i32) -> Self {
        self.row = row;
        self
    }

    /// Sets the seat number.
    pub fn seat(mut self, seat: i32) -> Self {
        self.seat = seat;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            row: ActiveValue::Set(self.row),
            seat: ActiveValue::Set(self.seat),
            movie_session_id: ActiveValue::Set(self.movie_session_id),
            order_id: ActiveValue::Set(self.order_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket for the given row and seat.
pub async fn create_ticket(
    db: &DatabaseConnection,
    movie_session_id: i32,
    order_id: i32,
    row: i32,
    seat: i32,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, movie_session_id, order_id)
        .row(row)
        .seat(seat)
        .build()
        .await
}
