use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Services {
    Table,
    SellerId,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    BuyerId,
    SellerId,
    ServiceId,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    ServiceId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on services.seller_id for the my-services listing
        manager
            .create_index(
                Index::create()
                    .name("idx_services_seller_id")
                    .table(Services::Table)
                    .col(Services::SellerId)
                    .to_owned(),
            )
            .await?;

        // Index on orders.buyer_id for the purchases half of my-orders
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_buyer_id")
                    .table(Orders::Table)
                    .col(Orders::BuyerId)
                    .to_owned(),
            )
            .await?;

        // Index on orders.seller_id for the sales half of my-orders
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_seller_id")
                    .table(Orders::Table)
                    .col(Orders::SellerId)
                    .to_owned(),
            )
            .await?;

        // Index on orders.service_id for the purchased-before-review check
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_service_id")
                    .table(Orders::Table)
                    .col(Orders::ServiceId)
                    .to_owned(),
            )
            .await?;

        // Index on reviews.service_id for the aggregate recompute scan
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_service_id")
                    .table(Reviews::Table)
                    .col(Reviews::ServiceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_services_seller_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_buyer_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_seller_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_service_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reviews_service_id").to_owned())
            .await?;

        Ok(())
    }
}
