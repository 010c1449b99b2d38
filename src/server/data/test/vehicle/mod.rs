use crate::server::data::vehicle::VehicleRepository;
use test_utils::{builder::TestBuilder, error::TestError, factory};

mod find_by_id;
