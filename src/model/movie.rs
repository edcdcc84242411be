use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{actor::ActorDto, genre::GenreDto};

/// Writable movie shape, relations as ids.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MovieDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<i32>,
    pub actors: Vec<i32>,
}

/// Compact movie shape, relations as display names.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MovieListDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
}

/// Expanded movie shape, relations as nested objects.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MovieDetailDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<GenreDto>,
    pub actors: Vec<ActorDto>,
}

#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum MovieRepr {
    Compact(MovieListDto),
    Detail(MovieDetailDto),
    Full(MovieDto),
}

/// Payload for creating or replacing a movie.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MovieInputDto {
    pub title: String,
    pub description: String,
    pub duration: i32,
    #[serde(default)]
    pub genres: Vec<i32>,
    #[serde(default)]
    pub actors: Vec<i32>,
}
