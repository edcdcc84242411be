use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActorDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

/// Payload for creating or replacing an actor.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActorInputDto {
    pub first_name: String,
    pub last_name: String,
}
