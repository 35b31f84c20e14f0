use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Food::Table)
                    .if_not_exists()
                    .col(uuid(Food::Id).primary_key())
                    .col(uuid(Food::RestaurantId))
                    .col(integer(Food::Position))
                    .col(string(Food::Name))
                    .col(double(Food::Price))
                    .col(
                        timestamp_with_time_zone(Food::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_restaurant_id")
                            .from(Food::Table, Food::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Food::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Food {
    Table,
    Id,
    RestaurantId,
    Position,
    Name,
    Price,
    UpdatedAt,
}
