//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let hall = factory::cinema_hall::create_cinema_hall(&db).await?;
//!
//!     // Create with all dependencies
//!     let (movie, hall, session) =
//!         factory::helpers::create_movie_session_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let movie = factory::movie::MovieFactory::new(&db)
//!     .title("Inception")
//!     .genres(vec![drama.id])
//!     .actors(vec![actor.id])
//!     .build()
//!     .await?;
//! ```

pub mod actor;
pub mod cinema_hall;
pub mod genre;
pub mod helpers;
pub mod movie;
pub mod movie_session;
pub mod order;
pub mod ticket;
pub mod user;

pub use actor::create_actor;
pub use cinema_hall::create_cinema_hall;
pub use genre::create_genre;
pub use movie::create_movie;
pub use movie_session::create_movie_session;
pub use order::create_order;
pub use ticket::create_ticket;
pub use user::create_user;
