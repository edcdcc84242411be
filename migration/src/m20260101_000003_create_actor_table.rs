use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Actor::Table)
                    .if_not_exists()
                    .col(pk_auto(Actor::Id))
                    .col(string_len(Actor::FirstName, 255))
                    .col(string_len(Actor::LastName, 255))
                    .to_owned(),
            )
            .await?;

        // Movie filtering looks actors up by full name
        manager
            .create_index(
                Index::create()
                    .name("idx_actor_full_name")
                    .table(Actor::Table)
                    .col(Actor::FirstName)
                    .col(Actor::LastName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Actor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Actor {
    Table,
    Id,
    FirstName,
    LastName,
}
