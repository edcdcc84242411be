use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Client input that cannot be accepted.
///
/// Covers malformed query-string filters as well as request payloads that reference
/// unknown rows or violate seat booking rules. Every variant results in 400 Bad Request
/// with the error message as body.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// An `actors` filter token that is not exactly a first and a last name.
    #[error("Actor filter '{0}' must be a first and last name separated by a space")]
    MalformedActorName(String),

    /// A `movie` filter value that is not an integer id.
    #[error("Movie filter '{0}' is not a valid id")]
    InvalidMovieId(String),

    /// A `date` filter value that is not `YYYY-MM-DD`.
    #[error("Date filter '{0}' must use the YYYY-MM-DD format")]
    InvalidDate(String),

    /// A payload references a row that does not exist.
    #[error("{kind} with id {id} does not exist")]
    UnknownReference { kind: &'static str, id: i32 },

    /// A genre with this name already exists.
    #[error("Genre '{0}' already exists")]
    DuplicateGenre(String),

    /// A payload field has an unusable value.
    #[error("{field} {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    /// Ticket row outside the hall.
    #[error("row number must be in available range: (1, {rows}), got {row}")]
    RowOutOfRange { row: i32, rows: i32 },

    /// Ticket seat outside the row.
    #[error("seat number must be in available range: (1, {seats_in_row}), got {seat}")]
    SeatOutOfRange { seat: i32, seats_in_row: i32 },

    /// Seat already booked for the session, or requested twice in one order.
    #[error("Seat {seat} in row {row} is already taken for session {movie_session}")]
    SeatTaken {
        movie_session: i32,
        row: i32,
        seat: i32,
    },

    /// A layout change would leave a sold ticket outside the hall.
    #[error(
        "Seat {seat} in row {row} is sold for session {movie_session} and does not fit the new hall layout"
    )]
    SoldSeatOutsideLayout {
        movie_session: i32,
        row: i32,
        seat: i32,
    },

    /// Another order booked one of the requested seats while this one was being written.
    #[error("One or more requested seats have just been booked")]
    SeatsUnavailable,

    /// An order must contain at least one ticket.
    #[error("An order must contain at least one ticket")]
    EmptyOrder,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
