use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::{error::reject, state::AppState};

use super::dto::{ListPropertiesQuery, NewProperty};
use super::repo;
use super::repo_types::{Property, PropertyWithRating};

#[instrument(skip(state))]
pub async fn list_properties(
    State(state): State<AppState>,
    Query(q): Query<ListPropertiesQuery>,
) -> Result<Json<Vec<PropertyWithRating>>, (StatusCode, String)> {
    let rows = repo::search(&state.db, &q.filters(), q.limit)
        .await
        .map_err(reject)?;
    Ok(Json(rows))
}

#[instrument(skip(state, payload))]
pub async fn create_property(
    State(state): State<AppState>,
    Json(payload): Json<NewProperty>,
) -> Result<(StatusCode, Json<Property>), (StatusCode, String)> {
    let property = repo::create(&state.db, &payload).await.map_err(reject)?;
    info!(property_id = property.id, "property created");
    Ok((StatusCode::CREATED, Json(property)))
}
