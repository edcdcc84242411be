//! Cinema hall fixtures for creating in-memory test data.

use entity::cinema_hall;

/// Default test hall name.
pub const DEFAULT_NAME: &str = "Red Hall";

/// Default number of rows.
pub const DEFAULT_ROWS: i32 = 5;

/// Default number of seats in each row.
pub const DEFAULT_SEATS_IN_ROW: i32 = 10;

/// Creates a cinema hall entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Red Hall"`
/// - rows: `5`
/// - seats_in_row: `10`
pub fn entity() -> cinema_hall::Model {
    entity_builder().build()
}

/// Creates a cinema hall entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let hall = fixture::cinema_hall::entity_builder().rows(2).build();
/// assert_eq!(hall.rows, 2);
/// ```
pub fn entity_builder() -> CinemaHallEntityBuilder {
    CinemaHallEntityBuilder::default()
}

/// Builder for customized cinema hall entity models.
pub struct CinemaHallEntityBuilder {
    id: i32,
    name: String,
    rows: i32,
    seats_in_row: i32,
}

impl Default for CinemaHallEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            rows: DEFAULT_ROWS,
            seats_in_row: DEFAULT_SEATS_IN_ROW,
        }
    }
}

impl CinemaHallEntityBuilder {
    /// Sets the hall ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
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

    /// Builds and returns the cinema hall entity model.
    pub fn build(self) -> cinema_hall::Model {
        cinema_hall::Model {
            id: self.id,
            name: self.name,
            rows: self.rows,
            seats_in_row: self.seats_in_row,
        }
    }
}
