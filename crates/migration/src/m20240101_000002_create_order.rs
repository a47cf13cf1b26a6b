//! Create `order` table.
//!
//! `customer_id` and `executor_id` point at `user.id` but carry no FK
//! constraint: dangling references are allowed and nothing cascades.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(integer(Order::Id).primary_key())
                    .col(string_len(Order::Name, 50).not_null())
                    .col(string_len(Order::Description, 500).not_null())
                    .col(date(Order::StartDate).not_null())
                    .col(date(Order::EndDate).not_null())
                    .col(string_len(Order::Address, 100).not_null())
                    .col(integer(Order::Price).not_null())
                    .col(integer(Order::CustomerId).not_null())
                    .col(integer_null(Order::ExecutorId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Order::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Order {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Address,
    Price,
    CustomerId,
    ExecutorId,
}
