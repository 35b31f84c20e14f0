use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(uuid(Restaurant::Id).primary_key())
                    .col(string(Restaurant::Name))
                    .col(string(Restaurant::Category))
                    .col(string(Restaurant::Address))
                    .col(string(Restaurant::PhoneNumber))
                    .col(time(Restaurant::OpenTime))
                    .col(time(Restaurant::CloseTime))
                    .col(
                        timestamp_with_time_zone(Restaurant::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_category")
                    .table(Restaurant::Table)
                    .col(Restaurant::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    Table,
    Id,
    Name,
    Category,
    Address,
    PhoneNumber,
    OpenTime,
    CloseTime,
    UpdatedAt,
}
