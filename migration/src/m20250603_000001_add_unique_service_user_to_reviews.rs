use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Reviews {
    Table,
    ServiceId,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One review per (service, user). The handler also checks before
        // inserting, but only this index makes the rule hold under
        // concurrent submissions.
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_service_user_unique")
                    .table(Reviews::Table)
                    .col(Reviews::ServiceId)
                    .col(Reviews::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reviews_service_user_unique")
                    .table(Reviews::Table)
                    .to_owned(),
            )
            .await
    }
}
