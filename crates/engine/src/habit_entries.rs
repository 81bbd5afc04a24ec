//! Habit entry primitives.
//!
//! A `HabitEntry` is the completion record for one habit on one specific
//! date. The schema enforces at most one row per `(habit_id, date)` pair;
//! the engine upserts rather than inserting duplicates.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitEntry {
    pub id: i32,
    pub habit_id: i32,
    pub date: Date,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "habit_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub habit_id: i32,
    pub date: Date,
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::habits::Entity",
        from = "Column::HabitId",
        to = "super::habits::Column::Id"
    )]
    Habits,
}

impl Related<super::habits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Habits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HabitEntry {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            habit_id: model.habit_id,
            date: model.date,
            completed: model.completed,
        }
    }
}
