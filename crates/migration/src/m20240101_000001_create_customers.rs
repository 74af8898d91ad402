//! Create `customers` table.
//!
//! `balance` and both timestamps carry store-side defaults so rows inserted
//! outside the service still get them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(pk_auto(Customers::Id))
                    .col(string_len(Customers::FirstName, 100))
                    .col(string_len(Customers::LastName, 100))
                    .col(string_len_null(Customers::Email, 255))
                    .col(string_len_null(Customers::Phone, 50))
                    .col(text_null(Customers::Address))
                    .col(text_null(Customers::Notes))
                    .col(double(Customers::Balance).default(0.0))
                    .col(timestamp_with_time_zone(Customers::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Customers::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    Notes,
    Balance,
    CreatedAt,
    UpdatedAt,
}
