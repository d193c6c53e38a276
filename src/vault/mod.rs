use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save-password", post(handlers::save_password))
        .route("/get-passwords", get(handlers::get_passwords))
        .route("/get-password/:id", get(handlers::get_password))
        .route("/update-password/:id", put(handlers::update_password))
        .route("/delete-password/:id", delete(handlers::delete_password))
}
