use crate::server::{
    data::movie_session::MovieSessionRepository,
    model::movie_session::{MovieSessionFilter, MovieSessionParams},
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_filtered;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .unwrap()
}
