use super::*;

/// Tests an anonymous session resolves to no identity.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_session_has_no_identity() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let identity = AuthGuard::new(db, session).identity().await?;

    assert!(identity.is_none());

    Ok(())
}

/// Tests a stale user id is treated as anonymous rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn stale_user_id_has_no_identity() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(99).await?;

    let identity = AuthGuard::new(db, session).identity().await?;

    assert!(identity.is_none());

    Ok(())
}

/// Tests a cleared session loses its identity.
///
/// Expected: Some before clearing, None after
#[tokio::test]
async fn cleared_session_loses_identity() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);
    assert_eq!(guard.identity().await?.map(|u| u.id), Some(user.id));

    auth_session.clear().await;

    assert!(guard.identity().await?.is_none());

    Ok(())
}
