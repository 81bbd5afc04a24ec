//! Core engine for the personal dashboard.
//!
//! The engine owns all business rules and mediates every access to the
//! database: habit tracking (create, delete with cascade, per-day upsert,
//! dense month grids) and finance tracking (expense recording with atomic
//! card-debt updates, yearly category totals, per-card debt totals).

use chrono::NaiveDate;

pub use cards::Card;
pub use error::EngineError;
pub use expenses::{Category, Expense};
pub use habit_entries::HabitEntry;
pub use habits::Habit;
use sea_orm::{
    ActiveValue, QueryFilter, QueryOrder, QuerySelect, Statement, TransactionTrait, prelude::*,
};

mod cards;
mod error;
mod expenses;
mod habit_entries;
mod habits;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Clone, Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Add a new habit. The name is trimmed and must not be empty.
    pub async fn add_habit(&self, name: &str, created_date: NaiveDate) -> ResultEngine<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidName(
                "habit name must not be empty".to_string(),
            ));
        }

        let model = habits::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_string()),
            created_date: ActiveValue::Set(created_date),
        }
        .insert(&self.database)
        .await?;

        Ok(Habit::from(model))
    }

    /// Delete a habit together with all its entries.
    ///
    /// Both deletes run in one transaction so no orphaned entry survives.
    /// Removing an unknown id is a no-op, not an error.
    pub async fn remove_habit(&self, habit_id: i32) -> ResultEngine<()> {
        let db_tx = self.database.begin().await?;

        habit_entries::Entity::delete_many()
            .filter(habit_entries::Column::HabitId.eq(habit_id))
            .exec(&db_tx)
            .await?;
        habits::Entity::delete_many()
            .filter(habits::Column::Id.eq(habit_id))
            .exec(&db_tx)
            .await?;

        db_tx.commit().await?;
        Ok(())
    }

    /// List all habits in insertion order.
    pub async fn list_habits(&self) -> ResultEngine<Vec<Habit>> {
        let models = habits::Entity::find()
            .order_by_asc(habits::Column::Id)
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(Habit::from).collect())
    }

    /// Return the completion record for a habit on a date, if any.
    pub async fn entry(&self, habit_id: i32, date: NaiveDate) -> ResultEngine<Option<HabitEntry>> {
        let model = habit_entries::Entity::find()
            .filter(habit_entries::Column::HabitId.eq(habit_id))
            .filter(habit_entries::Column::Date.eq(date))
            .one(&self.database)
            .await?;

        Ok(model.map(HabitEntry::from))
    }

    /// Set the completion state of a habit for a date (upsert).
    ///
    /// Inserts a row if none exists for `(habit_id, date)`, otherwise
    /// updates its `completed` flag in place. Any date is valid: the user
    /// may pre-mark a future day.
    pub async fn toggle_day(
        &self,
        habit_id: i32,
        date: NaiveDate,
        completed: bool,
    ) -> ResultEngine<()> {
        let db_tx = self.database.begin().await?;

        habits::Entity::find_by_id(habit_id)
            .one(&db_tx)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("habit not exists".to_string()))?;

        let existing = habit_entries::Entity::find()
            .filter(habit_entries::Column::HabitId.eq(habit_id))
            .filter(habit_entries::Column::Date.eq(date))
            .one(&db_tx)
            .await?;

        match existing {
            Some(entry) => {
                habit_entries::ActiveModel {
                    id: ActiveValue::Set(entry.id),
                    completed: ActiveValue::Set(completed),
                    ..Default::default()
                }
                .update(&db_tx)
                .await?;
            }
            None => {
                habit_entries::ActiveModel {
                    id: ActiveValue::NotSet,
                    habit_id: ActiveValue::Set(habit_id),
                    date: ActiveValue::Set(date),
                    completed: ActiveValue::Set(completed),
                }
                .insert(&db_tx)
                .await?;
            }
        }

        db_tx.commit().await?;
        Ok(())
    }

    /// Dates in `(year, month)` on which the habit is marked completed.
    pub async fn completed_dates(
        &self,
        habit_id: i32,
        year: i32,
        month: u32,
    ) -> ResultEngine<Vec<NaiveDate>> {
        let (first, last) = util::month_bounds(year, month)?;

        let models = habit_entries::Entity::find()
            .filter(habit_entries::Column::HabitId.eq(habit_id))
            .filter(habit_entries::Column::Date.between(first, last))
            .filter(habit_entries::Column::Completed.eq(true))
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(|model| model.date).collect())
    }

    /// Dense completion grid for one habit and month.
    ///
    /// The result has exactly one slot per calendar day (28-31 depending on
    /// month and leap year), indexed by day-of-month minus one. Days with
    /// no stored entry map to `false`, so the grid never depends on the
    /// iteration order of the storage query.
    pub async fn month_grid(
        &self,
        habit_id: i32,
        year: i32,
        month: u32,
    ) -> ResultEngine<Vec<bool>> {
        use chrono::Datelike;

        let days = util::days_in_month(year, month)?;
        let mut grid = vec![false; days as usize];
        for date in self.completed_dates(habit_id, year, month).await? {
            grid[date.day0() as usize] = true;
        }

        Ok(grid)
    }

    /// Record an expense and charge it to a card, atomically.
    ///
    /// One transaction: insert the expense row, look the card up by name
    /// (creating it with zero prior debt on a miss), and increment its
    /// debt by the expense amount. If any step fails the whole operation
    /// rolls back, so the card debt never drifts from the expense sum.
    pub async fn add_expense(
        &self,
        date: NaiveDate,
        amount_minor: i64,
        card_used: &str,
        category: Category,
        description: Option<&str>,
    ) -> ResultEngine<Expense> {
        if amount_minor < 0 {
            return Err(EngineError::InvalidAmount(
                "amount must be >= 0".to_string(),
            ));
        }
        let card_name = card_used.trim();
        if card_name.is_empty() {
            return Err(EngineError::InvalidName(
                "card name must not be empty".to_string(),
            ));
        }

        let db_tx = self.database.begin().await?;

        let expense_model = expenses::ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(date),
            amount_minor: ActiveValue::Set(amount_minor),
            card_used: ActiveValue::Set(card_name.to_string()),
            category: ActiveValue::Set(category.as_str().to_string()),
            description: ActiveValue::Set(description.map(|s| s.to_string())),
        }
        .insert(&db_tx)
        .await?;

        let card = cards::Entity::find()
            .filter(cards::Column::CardName.eq(card_name))
            .one(&db_tx)
            .await?;
        match card {
            Some(card) => {
                cards::ActiveModel {
                    id: ActiveValue::Set(card.id),
                    debt_minor: ActiveValue::Set(card.debt_minor + amount_minor),
                    ..Default::default()
                }
                .update(&db_tx)
                .await?;
            }
            None => {
                cards::ActiveModel {
                    id: ActiveValue::NotSet,
                    card_name: ActiveValue::Set(card_name.to_string()),
                    debt_minor: ActiveValue::Set(amount_minor),
                }
                .insert(&db_tx)
                .await?;
            }
        }

        db_tx.commit().await?;

        Expense::try_from(expense_model)
    }

    /// Most recent expenses, newest first (date, then insertion order).
    pub async fn recent_expenses(&self, limit: u64) -> ResultEngine<Vec<Expense>> {
        let models = expenses::Entity::find()
            .order_by_desc(expenses::Column::Date)
            .order_by_desc(expenses::Column::Id)
            .limit(limit)
            .all(&self.database)
            .await?;

        models.into_iter().map(Expense::try_from).collect()
    }

    /// Spending totals per category for one year.
    ///
    /// Categories with no expense that year are omitted.
    pub async fn spending_by_category(&self, year: i32) -> ResultEngine<Vec<(Category, i64)>> {
        let (first, last) = util::year_bounds(year)?;

        let backend = self.database.get_database_backend();
        let stmt = Statement::from_sql_and_values(
            backend,
            "SELECT category, COALESCE(SUM(amount_minor), 0) AS total \
             FROM expenses \
             WHERE date >= ? AND date <= ? \
             GROUP BY category \
             ORDER BY category",
            vec![first.into(), last.into()],
        );

        let rows = self.database.query_all(stmt).await?;
        let mut totals = Vec::with_capacity(rows.len());
        for row in rows {
            let category: String = row.try_get("", "category")?;
            let total: i64 = row.try_get("", "total")?;
            totals.push((Category::try_from(category.as_str())?, total));
        }

        Ok(totals)
    }

    /// Debt per card plus the grand total, cumulative across all time.
    pub async fn debt_by_card(&self) -> ResultEngine<(Vec<(String, i64)>, i64)> {
        let models = cards::Entity::find()
            .order_by_asc(cards::Column::CardName)
            .all(&self.database)
            .await?;

        let debts: Vec<(String, i64)> = models
            .into_iter()
            .map(|card| (card.card_name, card.debt_minor))
            .collect();
        let total = debts.iter().map(|(_, debt)| debt).sum();

        Ok((debts, total))
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}
