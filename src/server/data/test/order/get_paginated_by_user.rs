use super::*;

/// Tests that listing returns only the user's orders, newest first.
///
/// Expected: own orders in descending creation order with correct total
#[tokio::test]
async fn lists_own_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let now = Utc::now();
    let older = factory::order::OrderFactory::new(db, user.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::order::OrderFactory::new(db, user.id)
        .created_at(now)
        .build()
        .await?;
    factory::order::create_order(db, other.id).await?;

    let (orders, total) = OrderRepository::new(db)
        .get_paginated_by_user(user.id, 0, 10)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        orders.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    Ok(())
}

/// Tests paging through orders.
///
/// Expected: second page holds the remainder
#[tokio::test]
async fn pages_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    for minutes in 0..12 {
        factory::order::OrderFactory::new(db, user.id)
            .created_at(now - Duration::minutes(minutes))
            .build()
            .await?;
    }

    let (orders, total) = OrderRepository::new(db)
        .get_paginated_by_user(user.id, 1, 10)
        .await?;

    assert_eq!(total, 12);
    assert_eq!(orders.len(), 2);

    Ok(())
}
