use super::*;

/// Tests renaming an existing genre.
///
/// Expected: Ok(Some) with the new name
#[tokio::test]
async fn renames_existing_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Genre)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::genre::create_genre_named(db, "Scifi").await?;

    let updated = GenreRepository::new(db)
        .update(
            genre.id,
            GenreParams {
                name: "Sci-Fi".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.map(|g| g.name), Some("Sci-Fi".to_string()));

    Ok(())
}

/// Tests updating a genre that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Genre)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = GenreRepository::new(db)
        .update(
            404,
            GenreParams {
                name: "Nothing".to_string(),
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
