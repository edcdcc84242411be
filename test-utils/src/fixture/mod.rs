//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to test
//! domain conversions and shape rendering without database overhead.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let hall = fixture::cinema_hall::entity_builder().rows(5).seats_in_row(10).build();
//! let session = fixture::movie_session::entity();
//! ```

pub mod cinema_hall;
pub mod genre;
pub mod movie;
pub mod movie_session;

pub use cinema_hall::{entity as cinema_hall_entity, entity_builder as cinema_hall_entity_builder};
pub use genre::entity as genre_entity;
pub use movie::entity as movie_entity;
pub use movie_session::entity as movie_session_entity;
