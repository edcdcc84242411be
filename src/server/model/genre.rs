//! Genre domain model and parameters.

use crate::{
    model::genre::{GenreDto, GenreInputDto},
    server::error::validation::ValidationError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    /// Converts an entity model to a genre domain model at the repository boundary.
    pub fn from_entity(entity: entity::genre::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> GenreDto {
        GenreDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Validated fields for creating or replacing a genre.
#[derive(Debug, Clone)]
pub struct GenreParams {
    pub name: String,
}

impl TryFrom<GenreInputDto> for GenreParams {
    type Error = ValidationError;

    fn try_from(dto: GenreInputDto) -> Result<Self, Self::Error> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "name",
                reason: "must not be blank",
            });
        }

        Ok(Self { name })
    }
}
