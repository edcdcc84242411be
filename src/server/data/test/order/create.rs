use super::*;

/// Tests creating an order with several tickets.
///
/// Expected: Ok with every ticket attached and session loaded
#[tokio::test]
async fn creates_order_with_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (movie, _, session) = factory::helpers::create_movie_session_with_dependencies(db).await?;

    let order = OrderRepository::new(db)
        .create(CreateOrderParams {
            user_id: user.id,
            tickets: vec![
                TicketParams {
                    row: 1,
                    seat: 1,
                    movie_session_id: session.id,
                },
                TicketParams {
                    row: 1,
                    seat: 2,
                    movie_session_id: session.id,
                },
            ],
        })
        .await?;

    assert_eq!(order.user_id, user.id);
    assert_eq!(order.tickets.len(), 2);
    assert_eq!(order.tickets[0].movie_session.movie.title, movie.title);

    Ok(())
}

/// Tests that a failing ticket insert rolls back the whole order.
///
/// Expected: Err and no order or ticket rows
#[tokio::test]
async fn rolls_back_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, _, session) = factory::helpers::create_movie_session_with_dependencies(db).await?;

    let result = OrderRepository::new(db)
        .create(CreateOrderParams {
            user_id: user.id,
            tickets: vec![
                TicketParams {
                    row: 1,
                    seat: 1,
                    movie_session_id: session.id,
                },
                TicketParams {
                    row: 1,
                    seat: 2,
                    movie_session_id: session.id + 100,
                },
            ],
        })
        .await;

    assert!(result.is_err());
    assert!(entity::prelude::Order::find().all(db).await?.is_empty());
    assert!(entity::prelude::Ticket::find().all(db).await?.is_empty());

    Ok(())
}
