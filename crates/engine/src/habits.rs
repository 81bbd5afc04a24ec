//! Habit primitives.
//!
//! A `Habit` is a named recurring activity tracked per calendar day through
//! [`HabitEntry`] rows.
//!
//! [`HabitEntry`]: super::habit_entries::HabitEntry

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: i32,
    pub name: String,
    pub created_date: Date,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "habits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::habit_entries::Entity")]
    HabitEntries,
}

impl Related<super::habit_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HabitEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Habit {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_date: model.created_date,
        }
    }
}
