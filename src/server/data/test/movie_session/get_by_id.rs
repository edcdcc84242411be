use super::*;

/// Tests availability for a 5x10 hall with 12 sold tickets.
///
/// Expected: 38 tickets available and 12 taken places
#[tokio::test]
async fn computes_tickets_available() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let movie = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::CinemaHallFactory::new(db)
        .rows(5)
        .seats_in_row(10)
        .build()
        .await?;
    let session = factory::movie_session::create_movie_session(db, movie.id, hall.id).await?;
    factory::helpers::book_seats(db, user.id, &session, hall.seats_in_row, 12).await?;

    let loaded = MovieSessionRepository::new(db)
        .get_by_id(session.id)
        .await?
        .unwrap();

    let availability = loaded.availability.unwrap();
    assert_eq!(availability.tickets_available, 38);
    assert_eq!(availability.taken_places.len(), 12);

    Ok(())
}

/// Tests that tickets of other sessions are not counted.
///
/// Expected: only the retrieved session's tickets reduce availability
#[tokio::test]
async fn counts_only_own_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (movie, hall, busy) = factory::helpers::create_movie_session_with_dependencies(db).await?;
    let quiet = factory::movie_session::MovieSessionFactory::new(db, movie.id, hall.id)
        .show_time(at(16, 21))
        .build()
        .await?;
    factory::helpers::book_seats(db, user.id, &busy, hall.seats_in_row, 4).await?;
    factory::helpers::book_seats(db, user.id, &quiet, hall.seats_in_row, 1).await?;

    let loaded = MovieSessionRepository::new(db)
        .get_by_id(quiet.id)
        .await?
        .unwrap();

    let availability = loaded.availability.unwrap();
    assert_eq!(availability.tickets_available, hall.rows * hall.seats_in_row - 1);

    Ok(())
}

/// Tests retrieving a session that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let loaded = MovieSessionRepository::new(db).get_by_id(3).await?;

    assert!(loaded.is_none());

    Ok(())
}
