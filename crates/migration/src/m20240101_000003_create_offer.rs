use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offer::Table)
                    .if_not_exists()
                    .col(integer(Offer::Id).primary_key())
                    .col(integer(Offer::OrderId).not_null())
                    .col(integer(Offer::ExecutorId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Offer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Offer { Table, Id, OrderId, ExecutorId }
