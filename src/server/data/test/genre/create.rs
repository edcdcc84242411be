use super::*;

/// Tests creating a genre.
///
/// Expected: Ok with the genre persisted under a generated id
#[tokio::test]
async fn creates_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Genre)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenreRepository::new(db);
    let genre = repo
        .create(GenreParams {
            name: "Drama".to_string(),
        })
        .await?;

    assert_eq!(genre.name, "Drama");
    let stored = entity::prelude::Genre::find_by_id(genre.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that genre names are unique at the database level.
///
/// Expected: Err when inserting a second genre with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Genre)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::genre::create_genre_named(db, "Horror").await?;

    let result = GenreRepository::new(db)
        .create(GenreParams {
            name: "Horror".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
