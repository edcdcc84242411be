use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{cinema_hall::CinemaHallDto, movie::MovieListDto};

/// Writable session shape, relations as ids.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MovieSessionDto {
    pub id: i32,
    pub show_time: NaiveDateTime,
    pub movie: i32,
    pub cinema_hall: i32,
}

/// Compact session shape used in listings.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MovieSessionListDto {
    pub id: i32,
    pub show_time: NaiveDateTime,
    pub movie_title: String,
    pub cinema_hall_name: String,
    pub cinema_hall_capacity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TakenPlaceDto {
    pub row: i32,
    pub seat: i32,
}

/// Expanded session shape returned when a single session is retrieved.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MovieSessionDetailDto {
    pub id: i32,
    pub show_time: NaiveDateTime,
    pub movie: MovieListDto,
    pub cinema_hall: CinemaHallDto,
    pub taken_places: Vec<TakenPlaceDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets_available: Option<i32>,
}

#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum MovieSessionRepr {
    Compact(MovieSessionListDto),
    Detail(MovieSessionDetailDto),
    Full(MovieSessionDto),
}

/// Payload for creating or replacing a movie session.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MovieSessionInputDto {
    pub show_time: NaiveDateTime,
    pub movie: i32,
    pub cinema_hall: i32,
}
