//! Session-backed identity resolution for request handlers.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
