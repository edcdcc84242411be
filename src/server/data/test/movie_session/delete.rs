use super::*;

/// Tests deleting a session removes its tickets.
///
/// Expected: Ok(true) and no tickets left
#[tokio::test]
async fn deletes_session_and_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, hall, session) = factory::helpers::create_movie_session_with_dependencies(db).await?;
    factory::helpers::book_seats(db, user.id, &session, hall.seats_in_row, 3).await?;

    let deleted = MovieSessionRepository::new(db).delete(session.id).await?;

    assert!(deleted);
    let tickets = entity::prelude::Ticket::find().all(db).await?;
    assert!(tickets.is_empty());

    Ok(())
}
