use super::*;

/// Tests filtering sessions by calendar date.
///
/// Expected: sessions on that day only, including one at midnight
#[tokio::test]
async fn filters_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_cinema_hall(db).await?;
    let midnight = factory::movie_session::MovieSessionFactory::new(db, movie.id, hall.id)
        .show_time(at(15, 0))
        .build()
        .await?;
    let evening = factory::movie_session::MovieSessionFactory::new(db, movie.id, hall.id)
        .show_time(at(15, 21))
        .build()
        .await?;
    factory::movie_session::MovieSessionFactory::new(db, movie.id, hall.id)
        .show_time(at(16, 0))
        .build()
        .await?;

    let filter = MovieSessionFilter::parse(Some("2026-06-15".to_string()), None).unwrap();
    let sessions = MovieSessionRepository::new(db).get_filtered(&filter).await?;

    assert_eq!(
        sessions.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![midnight.id, evening.id]
    );

    Ok(())
}

/// Tests filtering sessions by movie id with relations loaded.
///
/// Expected: only that movie's sessions, each with movie and hall
#[tokio::test]
async fn filters_by_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (movie, hall, session) =
        factory::helpers::create_movie_session_with_dependencies(db).await?;
    let other = factory::movie::create_movie(db).await?;
    factory::movie_session::create_movie_session(db, other.id, hall.id).await?;

    let filter = MovieSessionFilter {
        date: None,
        movie_id: Some(movie.id),
    };
    let sessions = MovieSessionRepository::new(db).get_filtered(&filter).await?;

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, session.id);
    assert_eq!(sessions[0].movie.title, movie.title);
    assert_eq!(sessions[0].cinema_hall.name, hall.name);
    assert!(sessions[0].availability.is_none());

    Ok(())
}
