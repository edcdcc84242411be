//! Domain models.
//!
//! Repositories convert entity models into these types; controllers convert them into
//! DTOs through `into_dto` or, for resources with several output forms, `into_repr`.

pub mod actor;
pub mod cinema_hall;
pub mod genre;
pub mod movie;
pub mod movie_session;
pub mod order;
pub mod shape;
pub mod user;
