use super::*;

/// Tests that only unknown ids are reported.
///
/// Expected: Ok with the ids that have no row
#[tokio::test]
async fn reports_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Genre)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::genre::create_genre(db).await?;

    let missing = GenreRepository::new(db)
        .find_missing(&[genre.id, genre.id + 100])
        .await?;

    assert_eq!(missing, vec![genre.id + 100]);

    Ok(())
}
