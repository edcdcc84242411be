pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_genre_table;
mod m20260101_000003_create_actor_table;
mod m20260101_000004_create_cinema_hall_table;
mod m20260101_000005_create_movie_table;
mod m20260101_000006_create_movie_genre_table;
mod m20260101_000007_create_movie_actor_table;
mod m20260102_000008_create_movie_session_table;
mod m20260103_000009_create_order_table;
mod m20260103_000010_create_ticket_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_genre_table::Migration),
            Box::new(m20260101_000003_create_actor_table::Migration),
            Box::new(m20260101_000004_create_cinema_hall_table::Migration),
            Box::new(m20260101_000005_create_movie_table::Migration),
            Box::new(m20260101_000006_create_movie_genre_table::Migration),
            Box::new(m20260101_000007_create_movie_actor_table::Migration),
            Box::new(m20260102_000008_create_movie_session_table::Migration),
            Box::new(m20260103_000009_create_order_table::Migration),
            Box::new(m20260103_000010_create_ticket_table::Migration),
        ]
    }
}
