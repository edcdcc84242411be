use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CinemaHall::Table)
                    .if_not_exists()
                    .col(pk_auto(CinemaHall::Id))
                    .col(string_len(CinemaHall::Name, 255))
                    .col(integer(CinemaHall::Rows))
                    .col(integer(CinemaHall::SeatsInRow))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CinemaHall::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CinemaHall {
    Table,
    Id,
    Name,
    Rows,
    SeatsInRow,
}
