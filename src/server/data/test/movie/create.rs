use super::*;

/// Tests creating a movie with genres and actors.
///
/// Expected: Ok with relations linked and returned
#[tokio::test]
async fn creates_movie_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drama = factory::genre::create_genre_named(db, "Drama").await?;
    let actor = factory::actor::create_actor_named(db, "Al", "Pacino").await?;

    let movie = MovieRepository::new(db)
        .create(MovieParams {
            title: "The Godfather".to_string(),
            description: "A crime family saga.".to_string(),
            duration: 175,
            genre_ids: vec![drama.id],
            actor_ids: vec![actor.id],
        })
        .await?;

    assert_eq!(movie.title, "The Godfather");
    assert_eq!(movie.genres.len(), 1);
    assert_eq!(movie.genres[0].name, "Drama");
    assert_eq!(movie.actors[0].full_name(), "Al Pacino");

    Ok(())
}

/// Tests creating a movie without relations.
///
/// Expected: Ok with empty genre and actor lists
#[tokio::test]
async fn creates_movie_without_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = MovieRepository::new(db)
        .create(MovieParams {
            title: "Untitled".to_string(),
            description: String::new(),
            duration: 90,
            genre_ids: vec![],
            actor_ids: vec![],
        })
        .await?;

    assert!(movie.genres.is_empty());
    assert!(movie.actors.is_empty());
    let links = entity::prelude::MovieGenre::find().all(db).await?;
    assert!(links.is_empty());

    Ok(())
}
