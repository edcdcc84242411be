use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000004_create_cinema_hall_table::CinemaHall,
    m20260101_000005_create_movie_table::Movie,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieSession::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieSession::Id))
                    .col(date_time(MovieSession::ShowTime))
                    .col(integer(MovieSession::MovieId))
                    .col(integer(MovieSession::CinemaHallId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_session_movie_id")
                            .from(MovieSession::Table, MovieSession::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_session_cinema_hall_id")
                            .from(MovieSession::Table, MovieSession::CinemaHallId)
                            .to(CinemaHall::Table, CinemaHall::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_session_show_time")
                    .table(MovieSession::Table)
                    .col(MovieSession::ShowTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MovieSession {
    Table,
    Id,
    ShowTime,
    MovieId,
    CinemaHallId,
}
