use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_catalog_tables::Product;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240601_000003_create_customer_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customer::CustomerId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customer::FirstName).string().null())
                    .col(ColumnDef::new(Customer::MiddleName).string().null())
                    .col(ColumnDef::new(Customer::LastName).string().null())
                    .col(ColumnDef::new(Customer::Phonenumber).string().null())
                    .col(ColumnDef::new(Customer::Email).string().null())
                    .col(ColumnDef::new(Customer::Address).string().null())
                    .to_owned(),
            )
            .await?;

        // ORDER is a reserved word; sea-query quotes every identifier it emits.
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Order::OrderId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Order::OrderDate).date().null())
                    .col(ColumnDef::new(Order::ProductName).string().null())
                    .col(ColumnDef::new(Order::Amount).decimal_len(12, 2).null())
                    .col(ColumnDef::new(Order::ProductId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_product")
                            .from(Order::Table, Order::ProductId)
                            .to(Product::Table, Product::ProductId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invoice::InvoiceId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invoice::CustomerId).integer().null())
                    .col(ColumnDef::new(Invoice::CustomerName).string().null())
                    .col(ColumnDef::new(Invoice::TotalAmount).decimal_len(12, 2).null())
                    .col(ColumnDef::new(Invoice::InvoiceDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sale::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sale::SaleId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sale::Date).date().null())
                    .col(ColumnDef::new(Sale::Time).time().null())
                    .col(ColumnDef::new(Sale::InvoiceNumber).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_invoice")
                            .from(Sale::Table, Sale::InvoiceNumber)
                            .to(Invoice::Table, Invoice::InvoiceId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sale::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customer {
    #[sea_orm(iden = "CUSTOMER")]
    Table,
    #[sea_orm(iden = "customerID")]
    CustomerId,
    #[sea_orm(iden = "firstName")]
    FirstName,
    #[sea_orm(iden = "middleName")]
    MiddleName,
    #[sea_orm(iden = "lastName")]
    LastName,
    #[sea_orm(iden = "phonenumber")]
    Phonenumber,
    #[sea_orm(iden = "email")]
    Email,
    #[sea_orm(iden = "address")]
    Address,
}

#[derive(DeriveIden)]
enum Order {
    #[sea_orm(iden = "ORDER")]
    Table,
    #[sea_orm(iden = "orderID")]
    OrderId,
    #[sea_orm(iden = "orderDate")]
    OrderDate,
    #[sea_orm(iden = "productName")]
    ProductName,
    #[sea_orm(iden = "amount")]
    Amount,
    #[sea_orm(iden = "productID")]
    ProductId,
}

#[derive(DeriveIden)]
enum Invoice {
    #[sea_orm(iden = "INVOICE")]
    Table,
    #[sea_orm(iden = "invoiceID")]
    InvoiceId,
    #[sea_orm(iden = "customerID")]
    CustomerId,
    #[sea_orm(iden = "customerName")]
    CustomerName,
    #[sea_orm(iden = "totalAmount")]
    TotalAmount,
    #[sea_orm(iden = "invoiceDate")]
    InvoiceDate,
}

#[derive(DeriveIden)]
enum Sale {
    #[sea_orm(iden = "SALE")]
    Table,
    #[sea_orm(iden = "saleID")]
    SaleId,
    #[sea_orm(iden = "date")]
    Date,
    #[sea_orm(iden = "time")]
    Time,
    #[sea_orm(iden = "invoiceNumber")]
    InvoiceNumber,
}
