//! Card primitives.
//!
//! A `Card` is a payment instrument accumulating debt from expenses. Cards
//! are created implicitly the first time an expense references an unseen
//! card name; `debt_minor` only ever grows (paying down debt is out of
//! scope).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: i32,
    pub card_name: String,
    /// Accumulated debt in minor units (cents).
    pub debt_minor: i64,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub card_name: String,
    pub debt_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Card {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            card_name: model.card_name,
            debt_minor: model.debt_minor,
        }
    }
}
