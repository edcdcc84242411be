use super::*;

/// Tests deleting a genre also unlinks it from movies.
///
/// Expected: Ok(true), the movie survives without the genre
#[tokio::test]
async fn deletes_genre_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::genre::create_genre(db).await?;
    let movie = factory::movie::MovieFactory::new(db)
        .genres(vec![genre.id])
        .build()
        .await?;

    let deleted = GenreRepository::new(db).delete(genre.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Movie::find_by_id(movie.id)
        .one(db)
        .await?
        .is_some());
    let links = entity::prelude::MovieGenre::find().all(db).await?;
    assert!(links.is_empty());

    Ok(())
}

/// Tests deleting a genre that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Genre)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = GenreRepository::new(db).delete(1).await?;

    assert!(!deleted);

    Ok(())
}
