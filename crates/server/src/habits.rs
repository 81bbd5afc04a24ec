//! Habit API endpoints

use api_types::habit::{HabitList, HabitNew, HabitView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn view(habit: engine::Habit) -> HabitView {
    HabitView {
        id: habit.id,
        name: habit.name,
        created_date: habit.created_date,
    }
}

/// Handle requests for creating a new habit.
///
/// The creation date is always "today" on the server clock.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<HabitNew>,
) -> Result<(StatusCode, Json<HabitView>), ServerError> {
    let today = chrono::Local::now().date_naive();
    let habit = state.engine.add_habit(&payload.name, today).await?;

    Ok((StatusCode::CREATED, Json(view(habit))))
}

/// Handle requests for listing all habits, in insertion order.
pub async fn list(State(state): State<ServerState>) -> Result<Json<HabitList>, ServerError> {
    let habits = state.engine.list_habits().await?;

    Ok(Json(HabitList {
        habits: habits.into_iter().map(view).collect(),
    }))
}

/// Handle requests for deleting a habit and all its entries.
///
/// Idempotent: deleting an unknown id still answers 204.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.remove_habit(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
