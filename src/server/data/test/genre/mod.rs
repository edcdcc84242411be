use crate::server::{data::genre::GenreRepository, model::genre::GenreParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_missing;
mod update;
