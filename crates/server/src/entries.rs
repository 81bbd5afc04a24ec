//! Habit entry API endpoints

use api_types::entry::{DayToggle, MonthGrid, MonthGridQuery};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

/// Handle requests for setting one day's completion state (upsert).
pub async fn toggle(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<DayToggle>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .toggle_day(id, payload.date, payload.completed)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handle requests for a habit's dense month grid.
pub async fn month_grid(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Query(query): Query<MonthGridQuery>,
) -> Result<Json<MonthGrid>, ServerError> {
    let days = state.engine.month_grid(id, query.year, query.month).await?;

    Ok(Json(MonthGrid {
        year: query.year,
        month: query.month,
        days,
    }))
}
