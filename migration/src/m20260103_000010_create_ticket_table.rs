use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260102_000008_create_movie_session_table::MovieSession,
    m20260103_000009_create_order_table::Order,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(integer(Ticket::Row))
                    .col(integer(Ticket::Seat))
                    .col(integer(Ticket::MovieSessionId))
                    .col(integer(Ticket::OrderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_movie_session_id")
                            .from(Ticket::Table, Ticket::MovieSessionId)
                            .to(MovieSession::Table, MovieSession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_order_id")
                            .from(Ticket::Table, Ticket::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A seat can only be sold once per session
        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_session_row_seat")
                    .table(Ticket::Table)
                    .col(Ticket::MovieSessionId)
                    .col(Ticket::Row)
                    .col(Ticket::Seat)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    Row,
    Seat,
    MovieSessionId,
    OrderId,
}
