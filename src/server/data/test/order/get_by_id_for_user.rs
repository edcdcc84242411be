use super::*;

/// Tests that an order is only visible to its owner.
///
/// Expected: Some for the owner, None for anyone else
#[tokio::test]
async fn scopes_order_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let (_, hall, session) = factory::helpers::create_movie_session_with_dependencies(db).await?;
    let (order, _) =
        factory::helpers::book_seats(db, owner.id, &session, hall.seats_in_row, 2).await?;

    let repo = OrderRepository::new(db);
    let own = repo.get_by_id_for_user(order.id, owner.id).await?;
    let foreign = repo.get_by_id_for_user(order.id, stranger.id).await?;

    assert_eq!(own.map(|o| o.tickets.len()), Some(2));
    assert!(foreign.is_none());

    Ok(())
}
