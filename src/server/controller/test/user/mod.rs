use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use super::*;
use crate::server::controller::{
    user::{get_all_users, get_user_by_id, get_user_favorites},
    util::id_path::IdPath,
};

mod get_all_users;
