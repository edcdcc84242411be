use crate::server::{
    data::order::OrderRepository,
    model::order::{CreateOrderParams, TicketParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_ticket_outside_layout;
mod get_by_id_for_user;
mod get_paginated_by_user;
