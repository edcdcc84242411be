//! Order data repository for database operations.
//!
//! Orders are always read back scoped to their owner. Creation writes the order and all
//! of its tickets in a single transaction.

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::movie_session::MovieSessionRepository,
    model::order::{CreateOrderParams, Order, Ticket},
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order and its tickets atomically.
    ///
    /// Either every ticket is written or none is. A seat booked concurrently surfaces as
    /// the unique index violation on `(movie_session_id, row, seat)`.
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let txn = self.db.begin().await?;

        let order = entity::order::ActiveModel {
            created_at: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for ticket in params.tickets {
            entity::ticket::ActiveModel {
                row: ActiveValue::Set(ticket.row),
                seat: ActiveValue::Set(ticket.seat),
                movie_session_id: ActiveValue::Set(ticket.movie_session_id),
                order_id: ActiveValue::Set(order.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.get_by_id_for_user(order.id, params.user_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Order with id {} not found after creation",
                order.id
            )))
    }

    /// Gets one page of a user's orders, newest first, with the total order count
    pub async fn get_paginated_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((self.attach_tickets(orders).await?, total))
    }

    /// Gets an order by id only if it belongs to `user_id`
    pub async fn get_by_id_for_user(&self, id: i32, user_id: i32) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id)
            .filter(entity::order::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.attach_tickets(vec![order]).await?.pop())
    }

    /// Gets tickets already sold for any of the given sessions
    pub async fn get_tickets_for_sessions(
        &self,
        session_ids: &[i32],
    ) -> Result<Vec<entity::ticket::Model>, DbErr> {
        if session_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::MovieSessionId.is_in(session_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Finds a ticket sold for any session in `cinema_hall_id` whose place lies outside a
    /// `rows` x `seats_in_row` layout
    pub async fn find_ticket_outside_layout(
        &self,
        cinema_hall_id: i32,
        rows: i32,
        seats_in_row: i32,
    ) -> Result<Option<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find()
            .inner_join(entity::prelude::MovieSession)
            .filter(entity::movie_session::Column::CinemaHallId.eq(cinema_hall_id))
            .filter(
                Condition::any()
                    .add(entity::ticket::Column::Row.gt(rows))
                    .add(entity::ticket::Column::Seat.gt(seats_in_row)),
            )
            .order_by_asc(entity::ticket::Column::Id)
            .one(self.db)
            .await
    }

    async fn attach_tickets(&self, orders: Vec<entity::order::Model>) -> Result<Vec<Order>, DbErr> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let tickets = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        let session_ids: Vec<i32> = tickets
            .iter()
            .map(|t| t.movie_session_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let sessions = MovieSessionRepository::new(self.db)
            .get_by_ids(&session_ids)
            .await?;

        let mut by_order: HashMap<i32, Vec<Ticket>> = HashMap::new();
        for ticket in tickets {
            let session = sessions
                .get(&ticket.movie_session_id)
                .cloned()
                .ok_or(DbErr::RecordNotFound(format!(
                    "Movie session with id {} not found for ticket {}",
                    ticket.movie_session_id, ticket.id
                )))?;
            by_order
                .entry(ticket.order_id)
                .or_default()
                .push(Ticket::from_entity(ticket, session));
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let tickets = by_order.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, tickets)
            })
            .collect())
    }
}
