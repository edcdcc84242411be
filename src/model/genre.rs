use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GenreDto {
    pub id: i32,
    pub name: String,
}

/// Payload for creating or replacing a genre.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GenreInputDto {
    pub name: String,
}
