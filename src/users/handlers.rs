use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};

use crate::{error::reject, state::AppState};

use super::dto::{CreateUserRequest, EmailQuery};
use super::repo_types::User;
use super::services::is_valid_email;

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(mut payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }
    if payload.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Name is required".into()));
    }

    let user = User::create(
        &state.db,
        payload.name.trim(),
        &payload.email,
        &payload.password,
    )
    .await
    .map_err(reject)?;

    info!(user_id = user.id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, (StatusCode, String)> {
    match User::find_by_id(&state.db, id).await.map_err(reject)? {
        Some(user) => Ok(Json(user)),
        None => Err((StatusCode::NOT_FOUND, "User not found".into())),
    }
}

#[instrument(skip(state))]
pub async fn lookup_user(
    State(state): State<AppState>,
    Query(q): Query<EmailQuery>,
) -> Result<Json<User>, (StatusCode, String)> {
    match User::find_by_email(&state.db, &q.email).await.map_err(reject)? {
        Some(user) => Ok(Json(user)),
        None => Err((StatusCode::NOT_FOUND, "User not found".into())),
    }
}
