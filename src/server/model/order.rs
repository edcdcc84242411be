//! Order and ticket domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::order::{
        CreateOrderDto, OrderCreatedDto, OrderDto, OrderRepr, PaginatedOrdersDto, TicketDto,
        TicketListDto,
    },
    server::model::{movie_session::MovieSession, shape::Shape, user::User},
};

/// Fixed number of orders per listing page.
pub const ORDERS_PER_PAGE: u64 = 10;

/// A booked seat with its session loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub movie_session: MovieSession,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model, movie_session: MovieSession) -> Self {
        Self {
            id: entity.id,
            row: entity.row,
            seat: entity.seat,
            movie_session,
        }
    }

    pub fn into_list_dto(self) -> TicketListDto {
        TicketListDto {
            id: self.id,
            row: self.row,
            seat: self.seat,
            movie_session: self.movie_session.into_list_dto(),
        }
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            row: self.row,
            seat: self.seat,
            movie_session: self.movie_session.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
    pub tickets: Vec<Ticket>,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model, tickets: Vec<Ticket>) -> Self {
        Self {
            id: entity.id,
            created_at: entity.created_at,
            user_id: entity.user_id,
            tickets,
        }
    }

    /// Renders the order in the requested output shape.
    ///
    /// Orders have no compact form; it renders the same as `Detail`.
    pub fn into_repr(self, shape: Shape) -> OrderRepr {
        match shape {
            Shape::Compact | Shape::Detail => OrderRepr::Detail(OrderDto {
                id: self.id,
                tickets: self
                    .tickets
                    .into_iter()
                    .map(Ticket::into_list_dto)
                    .collect(),
                created_at: self.created_at,
            }),
            Shape::Full => OrderRepr::Full(OrderCreatedDto {
                id: self.id,
                tickets: self.tickets.into_iter().map(Ticket::into_dto).collect(),
                created_at: self.created_at,
            }),
        }
    }
}

/// One page of a user's orders, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrders {
    /// Page returned to callers without an identity.
    pub fn empty(page: u64) -> Self {
        Self {
            orders: Vec::new(),
            total: 0,
            page,
            per_page: ORDERS_PER_PAGE,
            total_pages: 0,
        }
    }

    pub fn into_dto(self, shape: Shape) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            orders: self
                .orders
                .into_iter()
                .map(|o| o.into_repr(shape))
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketParams {
    pub row: i32,
    pub seat: i32,
    pub movie_session_id: i32,
}

/// Fields for creating an order owned by `user_id`.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: i32,
    pub tickets: Vec<TicketParams>,
}

impl CreateOrderParams {
    /// Builds order parameters owned by `owner`.
    ///
    /// Any `user` in the payload is discarded; ownership always comes from the caller's identity.
    pub fn new(owner: &User, dto: CreateOrderDto) -> Self {
        if let Some(requested) = dto.user.filter(|u| *u != owner.id) {
            tracing::debug!(
                owner = owner.id,
                requested,
                "Ignoring user supplied in order payload"
            );
        }

        Self {
            user_id: owner.id,
            tickets: dto
                .tickets
                .into_iter()
                .map(|t| TicketParams {
                    row: t.row,
                    seat: t.seat,
                    movie_session_id: t.movie_session,
                })
                .collect(),
        }
    }
}
