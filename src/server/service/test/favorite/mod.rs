use crate::server::{
    error::AppError, model::favorite::FavoriteKind, service::favorite::FavoriteService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, error::TestError, factory};
