use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Orders: the view joins and the orders listing filters on customer_id
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_customer")
                    .table(Orders::Table)
                    .col(Orders::CustomerId)
                    .to_owned(),
            )
            .await?;

        // Customers: email lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_customers_email")
                    .table(Customers::Table)
                    .col(Customers::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_orders_customer").table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_customers_email").table(Customers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Orders { Table, CustomerId }

#[derive(DeriveIden)]
enum Customers { Table, Email }
