use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderCreatedDto, OrderDto, PaginatedOrdersDto},
    },
    server::{
        controller::param::PageParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            order::CreateOrderParams,
            shape::{Action, ORDER_SHAPES},
        },
        service::order::OrderService,
        state::AppState,
        util::parse::parse_page,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// List the caller's orders, newest first.
///
/// Anonymous callers receive an empty page rather than an error.
///
/// # Access Control
/// - Identity-scoped: only orders owned by the session user are returned
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for identity resolution
/// - `params` - `page` counting from 1, 10 orders per page
///
/// # Returns
/// - `200 OK` - One page of orders
/// - `400 Bad Request` - `page` is not a positive integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cinema/orders",
    tag = ORDER_TAG,
    params(PageParam),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = PaginatedOrdersDto),
        (status = 400, description = "Malformed page number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PageParam>,
) -> Result<impl IntoResponse, AppError> {
    let shape = ORDER_SHAPES.resolve(Action::List);
    let page = parse_page(params.page)?;

    let identity = AuthGuard::new(&state.db, &session).identity().await?;
    let orders = OrderService::new(&state.db)
        .get_paginated(identity.as_ref(), page)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto(shape))))
}

/// Book tickets as a new order.
///
/// The order is always owned by the caller; a `user` field in the payload is ignored.
///
/// # Access Control
/// - Requires an authenticated session
///
/// # Returns
/// - `201 Created` - Order in writable shape
/// - `400 Bad Request` - Empty order, unknown session, seat out of range or already taken
/// - `401 Unauthorized` - No authenticated user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cinema/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully created order", body = OrderCreatedDto),
        (status = 400, description = "Invalid tickets", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let shape = ORDER_SHAPES.resolve(Action::Create);
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let params = CreateOrderParams::new(&user, payload);
    let order = OrderService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(order.into_repr(shape))))
}

/// Get one of the caller's orders.
///
/// Orders of other users, and any order for anonymous callers, are reported as not found.
#[utoipa::path(
    get,
    path = "/api/cinema/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved order", body = OrderDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shape = ORDER_SHAPES.resolve(Action::Retrieve);

    let identity = AuthGuard::new(&state.db, &session).identity().await?;
    let order = OrderService::new(&state.db)
        .get_by_id(identity.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;

    Ok((StatusCode::OK, Json(order.into_repr(shape))))
}
