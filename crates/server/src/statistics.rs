//! Statistics API endpoints

use api_types::stats::{CardDebt, CardDebtView, CategorySpending, CategoryTotal, YearQuery};
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{ServerError, expenses::map_category_back, server::ServerState};

/// Handle requests for yearly spending totals per category.
pub async fn spending_by_category(
    State(state): State<ServerState>,
    Query(query): Query<YearQuery>,
) -> Result<Json<CategorySpending>, ServerError> {
    let totals = state.engine.spending_by_category(query.year).await?;

    Ok(Json(CategorySpending {
        year: query.year,
        totals: totals
            .into_iter()
            .map(|(category, total_minor)| CategoryTotal {
                category: map_category_back(category),
                total_minor,
            })
            .collect(),
    }))
}

/// Handle requests for cumulative per-card debt and the grand total.
pub async fn debt_by_card(
    State(state): State<ServerState>,
) -> Result<Json<CardDebt>, ServerError> {
    let (cards, total_minor) = state.engine.debt_by_card().await?;

    Ok(Json(CardDebt {
        cards: cards
            .into_iter()
            .map(|(card_name, debt_minor)| CardDebtView {
                card_name,
                debt_minor,
            })
            .collect(),
        total_minor,
    }))
}
