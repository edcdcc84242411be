//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities together
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a movie session together with the movie and hall it is shown in.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((movie, cinema_hall, movie_session))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_movie_session_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::movie::Model,
        entity::cinema_hall::Model,
        entity::movie_session::Model,
    ),
    DbErr,
> {
    let movie = crate::factory::movie::create_movie(db).await?;
    let hall = crate::factory::cinema_hall::create_cinema_hall(db).await?;
    let session = crate::factory::movie_session::create_movie_session(db, movie.id, hall.id).await?;

    Ok((movie, hall, session))
}

/// Books a number of seats for a session, filling rows left to right.
///
/// Creates one order owned by `user_id` holding all the tickets.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the created order
/// - `session` - Session to book seats for
/// - `seats_in_row` - Seats per row of the session's hall
/// - `count` - Number of tickets to create
///
/// # Returns
/// - `Ok((order, tickets))` - Created order and its tickets
/// - `Err(DbErr)` - Database error during creation
pub async fn book_seats(
    db: &DatabaseConnection,
    user_id: i32,
    session: &entity::movie_session::Model,
    seats_in_row: i32,
    count: i32,
) -> Result<(entity::order::Model, Vec<entity::ticket::Model>), DbErr> {
    let order = crate::factory::order::create_order(db, user_id).await?;

    let mut tickets = Vec::new();
    for i in 0..count {
        let row = i / seats_in_row + 1;
        let seat = i % seats_in_row + 1;
        let ticket = crate::factory::ticket::TicketFactory::new(db, session.id, order.id)
            .row(row)
            .seat(seat)
            .build()
            .await?;
        tickets.push(ticket);
    }

    Ok((order, tickets))
}
