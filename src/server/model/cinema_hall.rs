//! Cinema hall domain model and parameters.

use crate::{
    model::cinema_hall::{CinemaHallDto, CinemaHallInputDto},
    server::error::validation::ValidationError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CinemaHall {
    pub id: i32,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

impl CinemaHall {
    /// Converts an entity model to a cinema hall domain model at the repository boundary.
    pub fn from_entity(entity: entity::cinema_hall::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            rows: entity.rows,
            seats_in_row: entity.seats_in_row,
        }
    }

    /// Total number of seats in the hall.
    pub fn capacity(&self) -> i32 {
        self.rows.saturating_mul(self.seats_in_row)
    }

    /// Checks that a row and seat exist in this hall.
    ///
    /// # Returns
    /// - `Ok(())` - Both numbers are within the hall's layout
    /// - `Err(ValidationError::RowOutOfRange)` - Row outside `1..=rows`
    /// - `Err(ValidationError::SeatOutOfRange)` - Seat outside `1..=seats_in_row`
    pub fn check_place(&self, row: i32, seat: i32) -> Result<(), ValidationError> {
        if !(1..=self.rows).contains(&row) {
            return Err(ValidationError::RowOutOfRange {
                row,
                rows: self.rows,
            });
        }
        if !(1..=self.seats_in_row).contains(&seat) {
            return Err(ValidationError::SeatOutOfRange {
                seat,
                seats_in_row: self.seats_in_row,
            });
        }

        Ok(())
    }

    pub fn into_dto(self) -> CinemaHallDto {
        CinemaHallDto {
            capacity: self.capacity(),
            id: self.id,
            name: self.name,
            rows: self.rows,
            seats_in_row: self.seats_in_row,
        }
    }
}

/// Validated fields for creating or replacing a cinema hall.
#[derive(Debug, Clone)]
pub struct CinemaHallParams {
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

impl TryFrom<CinemaHallInputDto> for CinemaHallParams {
    type Error = ValidationError;

    fn try_from(dto: CinemaHallInputDto) -> Result<Self, Self::Error> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "name",
                reason: "must not be blank",
            });
        }
        if dto.rows < 1 {
            return Err(ValidationError::InvalidField {
                field: "rows",
                reason: "must be positive",
            });
        }
        if dto.seats_in_row < 1 {
            return Err(ValidationError::InvalidField {
                field: "seats_in_row",
                reason: "must be positive",
            });
        }
        if dto.rows.checked_mul(dto.seats_in_row).is_none() {
            return Err(ValidationError::InvalidField {
                field: "rows * seats_in_row",
                reason: "exceeds the largest supported hall capacity",
            });
        }

        Ok(Self {
            name,
            rows: dto.rows,
            seats_in_row: dto.seats_in_row,
        })
    }
}
