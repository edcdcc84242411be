use super::*;

fn ids(movies: &[crate::server::model::movie::Movie]) -> Vec<i32> {
    movies.iter().map(|m| m.id).collect()
}

/// Tests filtering by a single genre.
///
/// Expected: exactly the movies tagged with that genre
#[tokio::test]
async fn filters_by_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drama = factory::genre::create_genre_named(db, "Drama").await?;
    let comedy = factory::genre::create_genre_named(db, "Comedy").await?;
    let first = factory::movie::MovieFactory::new(db)
        .genres(vec![drama.id])
        .build()
        .await?;
    factory::movie::MovieFactory::new(db)
        .genres(vec![comedy.id])
        .build()
        .await?;
    let third = factory::movie::MovieFactory::new(db)
        .genres(vec![drama.id, comedy.id])
        .build()
        .await?;

    let filter = MovieFilter::parse(None, Some("Drama".to_string()), None).unwrap();
    let movies = MovieRepository::new(db).get_filtered(&filter).await?;

    assert_eq!(ids(&movies), vec![first.id, third.id]);

    Ok(())
}

/// Tests that listed actors are matched as a union.
///
/// Expected: movies with either actor, each once
#[tokio::test]
async fn matches_any_listed_actor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let john = factory::actor::create_actor_named(db, "John", "Doe").await?;
    let jane = factory::actor::create_actor_named(db, "Jane", "Smith").await?;
    let other = factory::actor::create_actor_named(db, "John", "Smith").await?;
    let johns = factory::movie::MovieFactory::new(db)
        .actors(vec![john.id])
        .build()
        .await?;
    let janes = factory::movie::MovieFactory::new(db)
        .actors(vec![jane.id])
        .build()
        .await?;
    let both = factory::movie::MovieFactory::new(db)
        .actors(vec![john.id, jane.id])
        .build()
        .await?;
    factory::movie::MovieFactory::new(db)
        .actors(vec![other.id])
        .build()
        .await?;

    let filter =
        MovieFilter::parse(Some("John Doe,Jane Smith".to_string()), None, None).unwrap();
    let movies = MovieRepository::new(db).get_filtered(&filter).await?;

    assert_eq!(ids(&movies), vec![johns.id, janes.id, both.id]);

    Ok(())
}

/// Tests combining genre and title filters.
///
/// Expected: only movies satisfying both
#[tokio::test]
async fn combines_dimensions_with_and() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let action = factory::genre::create_genre_named(db, "Action").await?;
    let matching = factory::movie::MovieFactory::new(db)
        .title("Die Hard")
        .genres(vec![action.id])
        .build()
        .await?;
    factory::movie::MovieFactory::new(db)
        .title("Die Laughing")
        .build()
        .await?;
    factory::movie::MovieFactory::new(db)
        .title("Speed")
        .genres(vec![action.id])
        .build()
        .await?;

    let filter = MovieFilter::parse(
        None,
        Some("Action".to_string()),
        Some("die".to_string()),
    )
    .unwrap();
    let movies = MovieRepository::new(db).get_filtered(&filter).await?;

    assert_eq!(ids(&movies), vec![matching.id]);

    Ok(())
}

/// Tests that an empty filter lists every movie with relations loaded.
///
/// Expected: all movies ordered by id
#[tokio::test]
async fn lists_everything_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_movie_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::genre::create_genre(db).await?;
    let first = factory::movie::MovieFactory::new(db)
        .genres(vec![genre.id])
        .build()
        .await?;
    let second = factory::movie::create_movie(db).await?;

    let movies = MovieRepository::new(db)
        .get_filtered(&MovieFilter::default())
        .await?;

    assert_eq!(ids(&movies), vec![first.id, second.id]);
    assert_eq!(movies[0].genres.len(), 1);
    assert!(movies[1].genres.is_empty());

    Ok(())
}
