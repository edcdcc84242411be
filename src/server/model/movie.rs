//! Movie domain model, parameters and listing filter.

use std::collections::BTreeSet;

use crate::{
    model::movie::{MovieDetailDto, MovieDto, MovieInputDto, MovieListDto, MovieRepr},
    server::{
        error::validation::ValidationError,
        model::{actor::Actor, genre::Genre, shape::Shape},
        util::parse::{non_empty, parse_actor_name, split_list},
    },
};

/// Movie with its genres and actors loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Running time in minutes.
    pub duration: i32,
    pub genres: Vec<Genre>,
    pub actors: Vec<Actor>,
}

impl Movie {
    /// Converts an entity model and its loaded relations to a movie domain model.
    pub fn from_entity(
        entity: entity::movie::Model,
        genres: Vec<Genre>,
        actors: Vec<Actor>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            duration: entity.duration,
            genres,
            actors,
        }
    }

    /// Renders the movie in the requested output shape.
    pub fn into_repr(self, shape: Shape) -> MovieRepr {
        match shape {
            Shape::Compact => MovieRepr::Compact(self.into_list_dto()),
            Shape::Detail => MovieRepr::Detail(self.into_detail_dto()),
            Shape::Full => MovieRepr::Full(self.into_dto()),
        }
    }

    pub fn into_list_dto(self) -> MovieListDto {
        MovieListDto {
            id: self.id,
            title: self.title,
            description: self.description,
            duration: self.duration,
            genres: self.genres.into_iter().map(|g| g.name).collect(),
            actors: self.actors.iter().map(Actor::full_name).collect(),
        }
    }

    pub fn into_detail_dto(self) -> MovieDetailDto {
        MovieDetailDto {
            id: self.id,
            title: self.title,
            description: self.description,
            duration: self.duration,
            genres: self.genres.into_iter().map(Genre::into_dto).collect(),
            actors: self.actors.into_iter().map(Actor::into_dto).collect(),
        }
    }

    pub fn into_dto(self) -> MovieDto {
        MovieDto {
            id: self.id,
            title: self.title,
            description: self.description,
            duration: self.duration,
            genres: self.genres.iter().map(|g| g.id).collect(),
            actors: self.actors.iter().map(|a| a.id).collect(),
        }
    }
}

/// Validated fields for creating or replacing a movie.
///
/// Genre and actor ids are deduplicated and sorted; their existence is checked by the service.
#[derive(Debug, Clone)]
pub struct MovieParams {
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genre_ids: Vec<i32>,
    pub actor_ids: Vec<i32>,
}

impl TryFrom<MovieInputDto> for MovieParams {
    type Error = ValidationError;

    fn try_from(dto: MovieInputDto) -> Result<Self, Self::Error> {
        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "title",
                reason: "must not be blank",
            });
        }
        if dto.duration < 1 {
            return Err(ValidationError::InvalidField {
                field: "duration",
                reason: "must be positive",
            });
        }

        Ok(Self {
            title,
            description: dto.description,
            duration: dto.duration,
            genre_ids: dedup(dto.genres),
            actor_ids: dedup(dto.actors),
        })
    }
}

fn dedup(ids: Vec<i32>) -> Vec<i32> {
    ids.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Criteria narrowing the movie listing.
///
/// Every present dimension must match (AND). Within `actors` and `genres` any listed
/// value may match (OR).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    /// `(first_name, last_name)` pairs matched exactly.
    pub actors: Option<Vec<(String, String)>>,
    /// Genre names matched exactly.
    pub genres: Option<Vec<String>>,
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
}

impl MovieFilter {
    /// Builds a filter from raw query-string values.
    ///
    /// Absent or empty values impose no constraint. A list that contains only separators
    /// is treated the same as an absent one.
    ///
    /// # Returns
    /// - `Ok(MovieFilter)` - Parsed filter
    /// - `Err(ValidationError::MalformedActorName)` - An actor token is not `"First Last"`
    pub fn parse(
        actors: Option<String>,
        genres: Option<String>,
        title: Option<String>,
    ) -> Result<Self, ValidationError> {
        let actors = match non_empty(actors) {
            Some(raw) => {
                let names = split_list(&raw)
                    .iter()
                    .map(|token| parse_actor_name(token))
                    .collect::<Result<Vec<_>, _>>()?;
                Some(names).filter(|n| !n.is_empty())
            }
            None => None,
        };

        let genres = non_empty(genres)
            .map(|raw| split_list(&raw))
            .filter(|g| !g.is_empty());

        Ok(Self {
            actors,
            genres,
            title: non_empty(title),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    fn sample_movie() -> Movie {
        Movie::from_entity(
            fixture::movie::entity(),
            vec![
                Genre::from_entity(fixture::genre::entity(1, "Action")),
                Genre::from_entity(fixture::genre::entity(2, "Sci-Fi")),
            ],
            vec![Actor {
                id: 7,
                first_name: "Keanu".to_string(),
                last_name: "Reeves".to_string(),
            }],
        )
    }

    #[test]
    fn compact_shape_uses_display_names() {
        let MovieRepr::Compact(dto) = sample_movie().into_repr(Shape::Compact) else {
            panic!("expected compact shape");
        };

        assert_eq!(dto.genres, vec!["Action", "Sci-Fi"]);
        assert_eq!(dto.actors, vec!["Keanu Reeves"]);
    }

    #[test]
    fn full_shape_uses_ids() {
        let MovieRepr::Full(dto) = sample_movie().into_repr(Shape::Full) else {
            panic!("expected full shape");
        };

        assert_eq!(dto.genres, vec![1, 2]);
        assert_eq!(dto.actors, vec![7]);
    }

    #[test]
    fn detail_shape_nests_relations() {
        let json = serde_json::to_value(sample_movie().into_repr(Shape::Detail)).unwrap();

        assert_eq!(json["genres"][1]["name"], "Sci-Fi");
        assert_eq!(json["actors"][0]["full_name"], "Keanu Reeves");
    }

    #[test]
    fn parses_all_filter_dimensions() {
        let filter = MovieFilter::parse(
            Some("Keanu Reeves,Carrie-Anne Moss".to_string()),
            Some("Action, Sci-Fi".to_string()),
            Some("matrix".to_string()),
        )
        .unwrap();

        assert_eq!(
            filter.actors,
            Some(vec![
                ("Keanu".to_string(), "Reeves".to_string()),
                ("Carrie-Anne".to_string(), "Moss".to_string()),
            ])
        );
        assert_eq!(
            filter.genres,
            Some(vec!["Action".to_string(), "Sci-Fi".to_string()])
        );
        assert_eq!(filter.title, Some("matrix".to_string()));
    }

    #[test]
    fn empty_values_impose_no_constraint() {
        let filter =
            MovieFilter::parse(Some(String::new()), Some(",".to_string()), Some(String::new()))
                .unwrap();

        assert_eq!(filter, MovieFilter::default());
    }

    #[test]
    fn rejects_malformed_actor_token() {
        let result = MovieFilter::parse(Some("Keanu".to_string()), None, None);

        assert_eq!(
            result,
            Err(ValidationError::MalformedActorName("Keanu".to_string()))
        );
    }

    #[test]
    fn deduplicates_relation_ids() {
        let params = MovieParams::try_from(MovieInputDto {
            title: "Heat".to_string(),
            description: String::new(),
            duration: 170,
            genres: vec![3, 1, 3],
            actors: vec![],
        })
        .unwrap();

        assert_eq!(params.genre_ids, vec![1, 3]);
    }
}
