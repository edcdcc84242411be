//! Wire types shared by the HTTP API.
//!
//! Each resource has one DTO per output shape (compact list item, expanded detail,
//! full writable form) plus the request payloads accepted on create and update.

pub mod actor;
pub mod api;
pub mod cinema_hall;
pub mod genre;
pub mod movie;
pub mod movie_session;
pub mod order;
