use super::*;

/// Tests that updating a movie replaces its relation sets.
///
/// Expected: Ok(Some) with the new genre only
#[tokio::test]
async fn replaces_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old_genre = factory::genre::create_genre(db).await?;
    let new_genre = factory::genre::create_genre(db).await?;
    let actor = factory::actor::create_actor(db).await?;
    let movie = factory::movie::MovieFactory::new(db)
        .genres(vec![old_genre.id])
        .actors(vec![actor.id])
        .build()
        .await?;

    let updated = MovieRepository::new(db)
        .update(
            movie.id,
            MovieParams {
                title: "Renamed".to_string(),
                description: movie.description.clone(),
                duration: movie.duration,
                genre_ids: vec![new_genre.id],
                actor_ids: vec![],
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(
        updated.genres.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![new_genre.id]
    );
    assert!(updated.actors.is_empty());

    Ok(())
}

/// Tests updating a movie that does not exist.
///
/// Expected: Ok(None) and nothing written
#[tokio::test]
async fn returns_none_for_missing_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = MovieRepository::new(db)
        .update(
            9,
            MovieParams {
                title: "Ghost".to_string(),
                description: String::new(),
                duration: 80,
                genre_ids: vec![],
                actor_ids: vec![],
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
