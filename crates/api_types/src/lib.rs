use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed set of spending categories exposed over the API.
///
/// Serialized in snake_case; the server rejects anything outside this set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Healthcare,
    Education,
    Other,
}

pub mod habit {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HabitNew {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HabitView {
        pub id: i32,
        pub name: String,
        pub created_date: NaiveDate,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HabitList {
        pub habits: Vec<HabitView>,
    }
}

pub mod entry {
    use super::*;

    /// Request body for setting one day's completion state (upsert).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DayToggle {
        pub date: NaiveDate,
        pub completed: bool,
    }

    /// Query string for a month grid.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthGridQuery {
        pub year: i32,
        pub month: u32,
    }

    /// Dense month grid: one slot per calendar day, absent entries are
    /// `false`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthGrid {
        pub year: i32,
        pub month: u32,
        pub days: Vec<bool>,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub date: NaiveDate,
        /// Amount in minor units (cents). Must be >= 0.
        pub amount_minor: i64,
        pub card_used: String,
        pub category: Category,
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: i32,
        pub date: NaiveDate,
        pub amount_minor: i64,
        pub card_used: String,
        pub category: Category,
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListQuery {
        pub limit: Option<u64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseList {
        pub expenses: Vec<ExpenseView>,
    }
}

pub mod stats {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct YearQuery {
        pub year: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryTotal {
        pub category: Category,
        pub total_minor: i64,
    }

    /// Yearly spending per category; zero-spend categories are omitted.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategorySpending {
        pub year: i32,
        pub totals: Vec<CategoryTotal>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CardDebtView {
        pub card_name: String,
        pub debt_minor: i64,
    }

    /// Cumulative debt per card with the grand total (no year filter).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CardDebt {
        pub cards: Vec<CardDebtView>,
        pub total_minor: i64,
    }
}
