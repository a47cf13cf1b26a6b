//! Create `user` table.
//!
//! Ids are supplied by the caller, never generated.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(integer(User::Id).primary_key())
                    .col(string_len(User::FirstName, 50).not_null())
                    .col(string_len(User::LastName, 50).not_null())
                    .col(integer(User::Age).not_null())
                    .col(string_len(User::Email, 100).not_null())
                    .col(string_len(User::Role, 50).not_null())
                    .col(string_len(User::Phone, 50).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User { Table, Id, FirstName, LastName, Age, Email, Role, Phone }
