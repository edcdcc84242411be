//! HTTP request handlers.
//!
//! Controllers parse query parameters and payloads into domain parameters, resolve the
//! caller's identity where a resource is identity-scoped, call the service layer and
//! render the result in the shape chosen for the operation.

pub mod actor;
pub mod cinema_hall;
pub mod genre;
pub mod movie;
pub mod movie_session;
pub mod order;
pub mod param;
