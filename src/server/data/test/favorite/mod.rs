use crate::server::{
    data::favorite::FavoriteRepository,
    model::{catalog::CatalogKind, favorite::FavoriteParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_for_target;
mod get_by_user;
