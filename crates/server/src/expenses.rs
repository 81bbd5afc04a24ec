//! Expense API endpoints

use api_types::Category as ApiCategory;
use api_types::expense::{ExpenseList, ExpenseListQuery, ExpenseNew, ExpenseView};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

pub(crate) fn map_category(category: ApiCategory) -> engine::Category {
    match category {
        ApiCategory::Food => engine::Category::Food,
        ApiCategory::Transport => engine::Category::Transport,
        ApiCategory::Entertainment => engine::Category::Entertainment,
        ApiCategory::Shopping => engine::Category::Shopping,
        ApiCategory::Bills => engine::Category::Bills,
        ApiCategory::Healthcare => engine::Category::Healthcare,
        ApiCategory::Education => engine::Category::Education,
        ApiCategory::Other => engine::Category::Other,
    }
}

pub(crate) fn map_category_back(category: engine::Category) -> ApiCategory {
    match category {
        engine::Category::Food => ApiCategory::Food,
        engine::Category::Transport => ApiCategory::Transport,
        engine::Category::Entertainment => ApiCategory::Entertainment,
        engine::Category::Shopping => ApiCategory::Shopping,
        engine::Category::Bills => ApiCategory::Bills,
        engine::Category::Healthcare => ApiCategory::Healthcare,
        engine::Category::Education => ApiCategory::Education,
        engine::Category::Other => ApiCategory::Other,
    }
}

fn view(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        date: expense.date,
        amount_minor: expense.amount_minor,
        card_used: expense.card_used,
        category: map_category_back(expense.category),
        description: expense.description,
    }
}

/// Handle requests for recording a new expense.
///
/// The engine inserts the expense and updates the card debt as one atomic
/// unit; this handler only translates the payload.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let expense = state
        .engine
        .add_expense(
            payload.date,
            payload.amount_minor,
            &payload.card_used,
            map_category(payload.category),
            payload.description.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(view(expense))))
}

/// Handle requests for listing recent expenses, newest first.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ExpenseListQuery>,
) -> Result<Json<ExpenseList>, ServerError> {
    let limit = query.limit.unwrap_or(20);
    let expenses = state.engine.recent_expenses(limit).await?;

    Ok(Json(ExpenseList {
        expenses: expenses.into_iter().map(view).collect(),
    }))
}
