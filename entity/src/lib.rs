//! SeaORM entity models for the cinema database.

pub mod prelude;

pub mod actor;
pub mod cinema_hall;
pub mod genre;
pub mod movie;
pub mod movie_actor;
pub mod movie_genre;
pub mod movie_session;
pub mod order;
pub mod ticket;
pub mod user;
