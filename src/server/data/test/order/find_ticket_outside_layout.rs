use super::*;

/// Tests finding a sold ticket that a smaller layout would drop.
///
/// Expected: the ticket in row 2 is reported for a one-row layout, nothing for two rows
#[tokio::test]
async fn finds_ticket_beyond_layout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, hall, session) = factory::helpers::create_movie_session_with_dependencies(db).await?;
    factory::helpers::book_seats(db, user.id, &session, hall.seats_in_row, hall.seats_in_row + 1)
        .await?;

    let repo = OrderRepository::new(db);
    let outside = repo
        .find_ticket_outside_layout(hall.id, 1, hall.seats_in_row)
        .await?;
    let inside = repo
        .find_ticket_outside_layout(hall.id, 2, hall.seats_in_row)
        .await?;

    assert_eq!(outside.map(|t| (t.row, t.seat)), Some((2, 1)));
    assert!(inside.is_none());

    Ok(())
}

/// Tests that seats beyond a narrower row count as outside the layout.
///
/// Expected: Some when seats per row shrink below a sold seat
#[tokio::test]
async fn finds_ticket_beyond_row_width() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, hall, session) = factory::helpers::create_movie_session_with_dependencies(db).await?;
    factory::helpers::book_seats(db, user.id, &session, hall.seats_in_row, 3).await?;

    let outside = OrderRepository::new(db)
        .find_ticket_outside_layout(hall.id, hall.rows, 2)
        .await?;

    assert_eq!(outside.map(|t| (t.row, t.seat)), Some((1, 3)));

    Ok(())
}
