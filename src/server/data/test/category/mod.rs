use crate::server::data::category::CategoryRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::category::CategoryFactory, seed::seed};

mod get_all;
