use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::movie_session::MovieSessionListDto;

/// Writable ticket shape, session as id.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub movie_session: i32,
}

/// Ticket with its session in compact shape.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketListDto {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub movie_session: MovieSessionListDto,
}

/// Order as shown to its owner when listing or retrieving.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub tickets: Vec<TicketListDto>,
    pub created_at: DateTime<Utc>,
}

/// Order echoed back in writable shape after creation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderCreatedDto {
    pub id: i32,
    pub tickets: Vec<TicketDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum OrderRepr {
    Detail(OrderDto),
    Full(OrderCreatedDto),
}

#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedOrdersDto {
    pub orders: Vec<OrderRepr>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketInputDto {
    pub row: i32,
    pub seat: i32,
    pub movie_session: i32,
}

/// Payload for creating an order.
///
/// `user` is accepted for compatibility with clients that send it but never honored:
/// the order is always owned by the caller.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    pub tickets: Vec<TicketInputDto>,
    #[serde(default)]
    pub user: Option<i32>,
}
