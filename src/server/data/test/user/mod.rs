use crate::server::data::user::UserRepository;
use test_utils::{builder::TestBuilder, error::TestError, factory};
