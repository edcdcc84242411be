use crate::server::{
    data::movie::MovieRepository,
    model::movie::{MovieFilter, MovieParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod get_filtered;
mod update;
