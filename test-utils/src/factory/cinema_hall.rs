//! Cinema hall factory for creating test hall entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cinema halls.
///
/// # Example
///
/// ```rust,ignore
/// let hall = CinemaHallFactory::new(&db).rows(5).seats_in_row(10).build().await?;
/// ```
pub struct CinemaHallFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rows: i32,
    seats_in_row: i32,
}

impl<'a> CinemaHallFactory<'a> {
    /// Creates a new CinemaHallFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hall {id}"`
    /// - rows: `10`
    /// - seats_in_row: `12`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Hall {}", next_id()),
            rows: 10,
            seats_in_row: 12,
        }
    }

    /// Sets the hall name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of rows.
    pub fn rows(mut self, rows: i32) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the number of seats in each row.
    pub fn seats_in_row(mut self, seats_in_row: i32) -> Self {
        self.seats_in_row = seats_in_row;
        self
    }

    /// Builds and inserts the cinema hall entity into the database.
    pub async fn build(self) -> Result<entity::cinema_hall::Model, DbErr> {
        entity::cinema_hall::ActiveModel {
            name: ActiveValue::Set(self.name),
            rows: ActiveValue::Set(self.rows),
            seats_in_row: ActiveValue::Set(self.seats_in_row),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a cinema hall with default values.
pub async fn create_cinema_hall(
    db: &DatabaseConnection,
) -> Result<entity::cinema_hall::Model, DbErr> {
    CinemaHallFactory::new(db).build().await
}
