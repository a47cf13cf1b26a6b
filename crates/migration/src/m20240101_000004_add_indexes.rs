use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Order: lookups by customer and by executor
        manager
            .create_index(
                Index::create()
                    .name("idx_order_customer")
                    .table(Order::Table)
                    .col(Order::CustomerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_order_executor")
                    .table(Order::Table)
                    .col(Order::ExecutorId)
                    .to_owned(),
            )
            .await?;

        // Offer: bids per order and per executor
        manager
            .create_index(
                Index::create()
                    .name("idx_offer_order")
                    .table(Offer::Table)
                    .col(Offer::OrderId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_offer_executor")
                    .table(Offer::Table)
                    .col(Offer::ExecutorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_offer_executor").table(Offer::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_offer_order").table(Offer::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_order_executor").table(Order::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_order_customer").table(Order::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Order { Table, CustomerId, ExecutorId }

#[derive(DeriveIden)]
enum Offer { Table, OrderId, ExecutorId }
