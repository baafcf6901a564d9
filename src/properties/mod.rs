use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod search;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/properties",
        get(handlers::list_properties).post(handlers::create_property),
    )
}
