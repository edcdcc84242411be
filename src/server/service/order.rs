//! Order booking and identity-scoped order queries.

use std::collections::{BTreeSet, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, movie_session::MovieSessionRepository, order::OrderRepository},
    error::{validation::ValidationError, AppError},
    model::{
        order::{CreateOrderParams, Order, PaginatedOrders, ORDERS_PER_PAGE},
        user::User,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the caller's orders, `page` counting from 1.
    ///
    /// Without an identity the page is empty; no other user's orders are ever returned.
    pub async fn get_paginated(
        &self,
        identity: Option<&User>,
        page: u64,
    ) -> Result<PaginatedOrders, AppError> {
        let Some(user) = identity else {
            return Ok(PaginatedOrders::empty(page));
        };

        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated_by_user(user.id, page.saturating_sub(1), ORDERS_PER_PAGE)
            .await?;

        Ok(PaginatedOrders {
            orders,
            total,
            page,
            per_page: ORDERS_PER_PAGE,
            total_pages: total.div_ceil(ORDERS_PER_PAGE),
        })
    }

    /// Gets one of the caller's orders; other users' orders are reported as absent
    pub async fn get_by_id(
        &self,
        identity: Option<&User>,
        id: i32,
    ) -> Result<Option<Order>, AppError> {
        let Some(user) = identity else {
            return Ok(None);
        };

        Ok(OrderRepository::new(self.db)
            .get_by_id_for_user(id, user.id)
            .await?)
    }

    /// Books the requested seats as a new order.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order and all tickets written
    /// - `Err(AppError::ValidationErr)` - Empty order, unknown session, seat outside the hall,
    ///   seat already taken or requested twice
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        if params.tickets.is_empty() {
            return Err(ValidationError::EmptyOrder.into());
        }

        let session_ids: Vec<i32> = params
            .tickets
            .iter()
            .map(|t| t.movie_session_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let sessions = MovieSessionRepository::new(self.db)
            .get_by_ids(&session_ids)
            .await?;

        let order_repo = OrderRepository::new(self.db);
        let taken: HashSet<(i32, i32, i32)> = order_repo
            .get_tickets_for_sessions(&session_ids)
            .await?
            .into_iter()
            .map(|t| (t.movie_session_id, t.row, t.seat))
            .collect();

        let mut requested = HashSet::new();
        for ticket in &params.tickets {
            let session = sessions.get(&ticket.movie_session_id).ok_or(
                ValidationError::UnknownReference {
                    kind: "Movie session",
                    id: ticket.movie_session_id,
                },
            )?;
            session.cinema_hall.check_place(ticket.row, ticket.seat)?;

            let place = (ticket.movie_session_id, ticket.row, ticket.seat);
            if taken.contains(&place) || !requested.insert(place) {
                return Err(ValidationError::SeatTaken {
                    movie_session: ticket.movie_session_id,
                    row: ticket.row,
                    seat: ticket.seat,
                }
                .into());
            }
        }

        match order_repo.create(params).await {
            Ok(order) => Ok(order),
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!("Seat booked concurrently: {}", err);
                Err(ValidationError::SeatsUnavailable.into())
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::order::{CreateOrderDto, TicketInputDto},
        server::model::order::TicketParams,
    };
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    fn as_user(entity: entity::user::Model) -> User {
        User::from_entity(entity)
    }

    fn ticket(session: i32, row: i32, seat: i32) -> TicketParams {
        TicketParams {
            row,
            seat,
            movie_session_id: session,
        }
    }

    #[tokio::test]
    async fn anonymous_listing_is_empty() {
        let test = TestBuilder::new()
            .with_cinema_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await.unwrap();
        factory::order::create_order(db, user.id).await.unwrap();

        let page = OrderService::new(db).get_paginated(None, 1).await.unwrap();

        assert!(page.orders.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn listing_reports_page_counts() {
        let test = TestBuilder::new()
            .with_cinema_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await.unwrap();
        for _ in 0..11 {
            factory::order::create_order(db, user.id).await.unwrap();
        }

        let page = OrderService::new(db)
            .get_paginated(Some(&as_user(user.clone())), 1)
            .await
            .unwrap();
        let last = OrderService::new(db)
            .get_paginated(Some(&as_user(user)), 2)
            .await
            .unwrap();

        assert_eq!(page.orders.len(), 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 11);
        assert_eq!(page.total_pages, 2);
        assert_eq!(last.orders.len(), 1);
    }

    #[tokio::test]
    async fn order_is_owned_by_caller_not_payload() {
        let test = TestBuilder::new()
            .with_cinema_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let caller = as_user(factory::user::create_user(db).await.unwrap());
        let claimed = factory::user::create_user(db).await.unwrap();
        let (_, _, session) = factory::helpers::create_movie_session_with_dependencies(db)
            .await
            .unwrap();

        let params = CreateOrderParams::new(
            &caller,
            CreateOrderDto {
                tickets: vec![TicketInputDto {
                    row: 1,
                    seat: 1,
                    movie_session: session.id,
                }],
                user: Some(claimed.id),
            },
        );
        let order = OrderService::new(db).create(params).await.unwrap();

        assert_eq!(order.user_id, caller.id);
        let foreign = OrderService::new(db)
            .get_by_id(Some(&as_user(claimed)), order.id)
            .await
            .unwrap();
        assert!(foreign.is_none());
    }

    #[tokio::test]
    async fn rejects_empty_order() {
        let test = TestBuilder::new()
            .with_cinema_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await.unwrap();

        let result = OrderService::new(db)
            .create(CreateOrderParams {
                user_id: user.id,
                tickets: vec![],
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::EmptyOrder))
        ));
    }

    #[tokio::test]
    async fn rejects_seat_outside_hall() {
        let test = TestBuilder::new()
            .with_cinema_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await.unwrap();
        let (_, hall, session) = factory::helpers::create_movie_session_with_dependencies(db)
            .await
            .unwrap();

        let result = OrderService::new(db)
            .create(CreateOrderParams {
                user_id: user.id,
                tickets: vec![ticket(session.id, hall.rows + 1, 1)],
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::RowOutOfRange { .. }))
        ));
    }

    #[tokio::test]
    async fn rejects_taken_seat() {
        let test = TestBuilder::new()
            .with_cinema_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await.unwrap();
        let (_, hall, session) = factory::helpers::create_movie_session_with_dependencies(db)
            .await
            .unwrap();
        factory::helpers::book_seats(db, user.id, &session, hall.seats_in_row, 1)
            .await
            .unwrap();

        let result = OrderService::new(db)
            .create(CreateOrderParams {
                user_id: user.id,
                tickets: vec![ticket(session.id, 1, 1)],
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::SeatTaken {
                row: 1,
                seat: 1,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn rejects_seat_requested_twice() {
        let test = TestBuilder::new()
            .with_cinema_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await.unwrap();
        let (_, _, session) = factory::helpers::create_movie_session_with_dependencies(db)
            .await
            .unwrap();

        let result = OrderService::new(db)
            .create(CreateOrderParams {
                user_id: user.id,
                tickets: vec![ticket(session.id, 2, 2), ticket(session.id, 2, 2)],
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::SeatTaken { .. }))
        ));
        assert!(entity::prelude::Order::find().all(db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_session() {
        let test = TestBuilder::new()
            .with_cinema_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await.unwrap();

        let result = OrderService::new(db)
            .create(CreateOrderParams {
                user_id: user.id,
                tickets: vec![ticket(77, 1, 1)],
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::UnknownReference {
                kind: "Movie session",
                id: 77
            }))
        ));
    }
}
