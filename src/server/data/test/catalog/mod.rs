use crate::server::{data::catalog::CatalogRepository, model::catalog::CatalogKind};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_all;
