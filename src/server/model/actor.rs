//! Actor domain model and parameters.

use crate::{
    model::actor::{ActorDto, ActorInputDto},
    server::error::validation::ValidationError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Actor {
    /// Converts an entity model to an actor domain model at the repository boundary.
    pub fn from_entity(entity: entity::actor::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    /// Full name as matched by the movie `actors` filter.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> ActorDto {
        ActorDto {
            full_name: self.full_name(),
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Validated fields for creating or replacing an actor.
#[derive(Debug, Clone)]
pub struct ActorParams {
    pub first_name: String,
    pub last_name: String,
}

impl TryFrom<ActorInputDto> for ActorParams {
    type Error = ValidationError;

    fn try_from(dto: ActorInputDto) -> Result<Self, Self::Error> {
        let first_name = dto.first_name.trim().to_string();
        let last_name = dto.last_name.trim().to_string();

        // Names containing whitespace could never be matched by the `actors` filter
        if first_name.is_empty() || first_name.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidField {
                field: "first_name",
                reason: "must be a single non-blank word",
            });
        }
        if last_name.is_empty() || last_name.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidField {
                field: "last_name",
                reason: "must be a single non-blank word",
            });
        }

        Ok(Self {
            first_name,
            last_name,
        })
    }
}
