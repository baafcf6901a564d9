use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::{error::reject, state::AppState};

use super::dto::ReservationsQuery;
use super::repo;
use super::repo_types::GuestReservation;

#[instrument(skip(state))]
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(q): Query<ReservationsQuery>,
) -> Result<Json<Vec<GuestReservation>>, (StatusCode, String)> {
    let rows = repo::list_for_guest(&state.db, q.guest_id, q.limit)
        .await
        .map_err(reject)?;
    Ok(Json(rows))
}
