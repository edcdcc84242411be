use super::*;

/// Tests creating a session returns it with movie and hall loaded.
///
/// Expected: Ok with relations populated and no availability
#[tokio::test]
async fn creates_session_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cinema_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_cinema_hall(db).await?;

    let session = MovieSessionRepository::new(db)
        .create(MovieSessionParams {
            show_time: at(20, 18),
            movie_id: movie.id,
            cinema_hall_id: hall.id,
        })
        .await?;

    assert_eq!(session.movie.title, movie.title);
    assert_eq!(session.cinema_hall.id, hall.id);
    assert!(session.availability.is_none());

    Ok(())
}
