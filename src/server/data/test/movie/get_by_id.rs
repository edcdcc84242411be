use super::*;

/// Tests loading a movie with its relations.
///
/// Expected: Ok(Some) with only this movie's genres
#[tokio::test]
async fn loads_own_relations_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let comedy = factory::genre::create_genre_named(db, "Comedy").await?;
    let horror = factory::genre::create_genre_named(db, "Horror").await?;
    let movie = factory::movie::MovieFactory::new(db)
        .genres(vec![comedy.id])
        .build()
        .await?;
    factory::movie::MovieFactory::new(db)
        .genres(vec![horror.id])
        .build()
        .await?;

    let loaded = MovieRepository::new(db).get_by_id(movie.id).await?.unwrap();

    assert_eq!(loaded.genres.len(), 1);
    assert_eq!(loaded.genres[0].id, comedy.id);

    Ok(())
}

/// Tests loading a movie that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let loaded = MovieRepository::new(db).get_by_id(1).await?;

    assert!(loaded.is_none());

    Ok(())
}
