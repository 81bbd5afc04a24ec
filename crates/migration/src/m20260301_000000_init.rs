//! Initial schema migration - creates all tables from scratch.
//!
//! It creates the complete schema for the dashboard:
//!
//! - `habits`: named recurring activities
//! - `habit_entries`: per-day completion records, one per (habit, date)
//! - `expenses`: immutable spending records
//! - `cards`: payment instruments accumulating debt
//!
//! Every statement is guarded with `if_not_exists` so startup can run the
//! migration idempotently without touching existing data.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Habits {
    Table,
    Id,
    Name,
    CreatedDate,
}

#[derive(Iden)]
enum HabitEntries {
    Table,
    Id,
    HabitId,
    Date,
    Completed,
}

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    Date,
    AmountMinor,
    CardUsed,
    Category,
    Description,
}

#[derive(Iden)]
enum Cards {
    Table,
    Id,
    CardName,
    DebtMinor,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Habits
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Habits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Habits::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Habits::Name).string().not_null())
                    .col(ColumnDef::new(Habits::CreatedDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Habit entries
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(HabitEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HabitEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HabitEntries::HabitId).integer().not_null())
                    .col(ColumnDef::new(HabitEntries::Date).date().not_null())
                    .col(
                        ColumnDef::new(HabitEntries::Completed)
                            .boolean()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-habit_entries-habit_id")
                            .from(HabitEntries::Table, HabitEntries::HabitId)
                            .to(Habits::Table, Habits::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one completion state per (habit, date). The engine upserts,
        // but the invariant lives in the schema, not in call discipline.
        manager
            .create_index(
                Index::create()
                    .name("idx-habit_entries-habit_id-date-unique")
                    .table(HabitEntries::Table)
                    .col(HabitEntries::HabitId)
                    .col(HabitEntries::Date)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Expenses
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::Date).date().not_null())
                    .col(
                        ColumnDef::new(Expenses::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::CardUsed).string().not_null())
                    .col(ColumnDef::new(Expenses::Category).string().not_null())
                    .col(ColumnDef::new(Expenses::Description).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-date")
                    .table(Expenses::Table)
                    .col(Expenses::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-category")
                    .table(Expenses::Table)
                    .col(Expenses::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Cards
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cards::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Cards::CardName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Cards::DebtMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HabitEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Habits::Table).to_owned())
            .await?;
        Ok(())
    }
}
