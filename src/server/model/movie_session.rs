//! Movie session domain model, seat availability and listing filter.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    model::movie_session::{
        MovieSessionDetailDto, MovieSessionDto, MovieSessionInputDto, MovieSessionListDto,
        MovieSessionRepr, TakenPlaceDto,
    },
    server::{
        error::validation::ValidationError,
        model::{cinema_hall::CinemaHall, movie::Movie, shape::Shape},
        util::parse::{non_empty, parse_date, parse_movie_id},
    },
};

/// A seat already booked for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TakenPlace {
    pub row: i32,
    pub seat: i32,
}

/// Booked seats of a session and how many remain free.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatAvailability {
    pub taken_places: Vec<TakenPlace>,
    pub tickets_available: i32,
}

impl SeatAvailability {
    /// Derives availability from the hall layout and the tickets sold for a session.
    pub fn compute(hall: &CinemaHall, tickets: &[entity::ticket::Model]) -> Self {
        let taken_places: Vec<TakenPlace> = tickets
            .iter()
            .map(|t| TakenPlace {
                row: t.row,
                seat: t.seat,
            })
            .collect();

        Self {
            tickets_available: hall.capacity() - taken_places.len() as i32,
            taken_places,
        }
    }
}

/// Screening of a movie in a hall with both relations loaded.
///
/// `availability` is only populated when a single session is retrieved.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSession {
    pub id: i32,
    pub show_time: NaiveDateTime,
    pub movie: Movie,
    pub cinema_hall: CinemaHall,
    pub availability: Option<SeatAvailability>,
}

impl MovieSession {
    /// Converts an entity model and its loaded relations to a session domain model.
    pub fn from_entity(
        entity: entity::movie_session::Model,
        movie: Movie,
        cinema_hall: CinemaHall,
    ) -> Self {
        Self {
            id: entity.id,
            show_time: entity.show_time,
            movie,
            cinema_hall,
            availability: None,
        }
    }

    pub fn with_availability(mut self, availability: SeatAvailability) -> Self {
        self.availability = Some(availability);
        self
    }

    /// Renders the session in the requested output shape.
    pub fn into_repr(self, shape: Shape) -> MovieSessionRepr {
        match shape {
            Shape::Compact => MovieSessionRepr::Compact(self.into_list_dto()),
            Shape::Detail => MovieSessionRepr::Detail(self.into_detail_dto()),
            Shape::Full => MovieSessionRepr::Full(self.into_dto()),
        }
    }

    pub fn into_list_dto(self) -> MovieSessionListDto {
        MovieSessionListDto {
            id: self.id,
            show_time: self.show_time,
            cinema_hall_capacity: self.cinema_hall.capacity(),
            movie_title: self.movie.title,
            cinema_hall_name: self.cinema_hall.name,
        }
    }

    pub fn into_detail_dto(self) -> MovieSessionDetailDto {
        let (taken_places, tickets_available) = match self.availability {
            Some(availability) => (
                availability
                    .taken_places
                    .into_iter()
                    .map(|p| TakenPlaceDto {
                        row: p.row,
                        seat: p.seat,
                    })
                    .collect(),
                Some(availability.tickets_available),
            ),
            None => (Vec::new(), None),
        };

        MovieSessionDetailDto {
            id: self.id,
            show_time: self.show_time,
            movie: self.movie.into_list_dto(),
            cinema_hall: self.cinema_hall.into_dto(),
            taken_places,
            tickets_available,
        }
    }

    pub fn into_dto(self) -> MovieSessionDto {
        MovieSessionDto {
            id: self.id,
            show_time: self.show_time,
            movie: self.movie.id,
            cinema_hall: self.cinema_hall.id,
        }
    }
}

/// Fields for creating or replacing a session.
#[derive(Debug, Clone)]
pub struct MovieSessionParams {
    pub show_time: NaiveDateTime,
    pub movie_id: i32,
    pub cinema_hall_id: i32,
}

impl From<MovieSessionInputDto> for MovieSessionParams {
    fn from(dto: MovieSessionInputDto) -> Self {
        Self {
            show_time: dto.show_time,
            movie_id: dto.movie,
            cinema_hall_id: dto.cinema_hall,
        }
    }
}

/// Criteria narrowing the session listing. Both dimensions combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieSessionFilter {
    /// Calendar day of `show_time`.
    pub date: Option<NaiveDate>,
    pub movie_id: Option<i32>,
}

impl MovieSessionFilter {
    /// Builds a filter from raw query-string values.
    ///
    /// # Returns
    /// - `Ok(MovieSessionFilter)` - Parsed filter, absent or empty values unconstrained
    /// - `Err(ValidationError::InvalidDate)` - `date` is not `YYYY-MM-DD`
    /// - `Err(ValidationError::InvalidMovieId)` - `movie` is not an integer
    pub fn parse(date: Option<String>, movie: Option<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            date: non_empty(date).map(|d| parse_date(&d)).transpose()?,
            movie_id: non_empty(movie).map(|m| parse_movie_id(&m)).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    fn sample_session() -> MovieSession {
        MovieSession::from_entity(
            fixture::movie_session::entity(),
            Movie::from_entity(fixture::movie::entity(), vec![], vec![]),
            CinemaHall::from_entity(fixture::cinema_hall::entity()),
        )
    }

    fn ticket(row: i32, seat: i32) -> entity::ticket::Model {
        entity::ticket::Model {
            id: row * 100 + seat,
            row,
            seat,
            movie_session_id: 1,
            order_id: 1,
        }
    }

    #[test]
    fn availability_subtracts_sold_tickets_from_capacity() {
        let hall = CinemaHall::from_entity(fixture::cinema_hall::entity());

        let availability = SeatAvailability::compute(&hall, &[ticket(1, 1), ticket(2, 5)]);

        assert_eq!(availability.tickets_available, hall.capacity() - 2);
        assert_eq!(
            availability.taken_places,
            vec![
                TakenPlace { row: 1, seat: 1 },
                TakenPlace { row: 2, seat: 5 }
            ]
        );
    }

    #[test]
    fn list_shape_never_carries_tickets_available() {
        let hall = CinemaHall::from_entity(fixture::cinema_hall::entity());
        let session =
            sample_session().with_availability(SeatAvailability::compute(&hall, &[ticket(1, 1)]));

        let json = serde_json::to_value(session.into_repr(Shape::Compact)).unwrap();

        assert!(json.get("tickets_available").is_none());
        assert_eq!(json["movie_title"], fixture::movie::DEFAULT_TITLE);
        assert_eq!(json["cinema_hall_capacity"], 50);
    }

    #[test]
    fn detail_shape_carries_availability() {
        let hall = CinemaHall::from_entity(fixture::cinema_hall::entity());
        let session =
            sample_session().with_availability(SeatAvailability::compute(&hall, &[ticket(3, 4)]));

        let json = serde_json::to_value(session.into_repr(Shape::Detail)).unwrap();

        assert_eq!(json["tickets_available"], 49);
        assert_eq!(json["taken_places"][0]["row"], 3);
        assert_eq!(json["cinema_hall"]["name"], fixture::cinema_hall::DEFAULT_NAME);
    }

    #[test]
    fn full_shape_uses_ids() {
        let MovieSessionRepr::Full(dto) = sample_session().into_repr(Shape::Full) else {
            panic!("expected full shape");
        };

        assert_eq!((dto.movie, dto.cinema_hall), (1, 1));
    }

    #[test]
    fn parses_session_filter() {
        let filter =
            MovieSessionFilter::parse(Some("2026-06-15".to_string()), Some("4".to_string()))
                .unwrap();

        assert_eq!(filter.date, NaiveDate::from_ymd_opt(2026, 6, 15));
        assert_eq!(filter.movie_id, Some(4));
    }

    #[test]
    fn rejects_non_integer_movie_filter() {
        let result = MovieSessionFilter::parse(None, Some("abc".to_string()));

        assert_eq!(
            result,
            Err(ValidationError::InvalidMovieId("abc".to_string()))
        );
    }
}
