use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240601_000001_create_catalog_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supplier::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Supplier::SupplierId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Supplier::FirstName).string().null())
                    .col(ColumnDef::new(Supplier::MiddleName).string().null())
                    .col(ColumnDef::new(Supplier::LastName).string().null())
                    .col(ColumnDef::new(Supplier::PhoneNumber).string().null())
                    .col(ColumnDef::new(Supplier::Address).string().null())
                    .col(ColumnDef::new(Supplier::Email).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Store::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Store::StoreId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Store::StoreName).string().null())
                    .col(ColumnDef::new(Store::StoreNumber).string().null())
                    .col(ColumnDef::new(Store::Location).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Product::ProductId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Product::ProductName).string().null())
                    .col(ColumnDef::new(Product::Cost).decimal_len(10, 2).null())
                    .col(ColumnDef::new(Product::Description).text().null())
                    .col(ColumnDef::new(Product::Quality).string().null())
                    .col(ColumnDef::new(Product::StoreId).integer().null())
                    .col(ColumnDef::new(Product::SupplierId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_store")
                            .from(Product::Table, Product::StoreId)
                            .to(Store::Table, Store::StoreId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_supplier")
                            .from(Product::Table, Product::SupplierId)
                            .to(Supplier::Table, Supplier::SupplierId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Store::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Supplier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Supplier {
    #[sea_orm(iden = "SUPPLIER")]
    Table,
    #[sea_orm(iden = "supplierID")]
    SupplierId,
    #[sea_orm(iden = "firstName")]
    FirstName,
    #[sea_orm(iden = "middleName")]
    MiddleName,
    #[sea_orm(iden = "lastName")]
    LastName,
    #[sea_orm(iden = "phoneNumber")]
    PhoneNumber,
    #[sea_orm(iden = "address")]
    Address,
    #[sea_orm(iden = "email")]
    Email,
}

#[derive(DeriveIden)]
pub(crate) enum Store {
    #[sea_orm(iden = "STORE")]
    Table,
    #[sea_orm(iden = "storeID")]
    StoreId,
    #[sea_orm(iden = "storeName")]
    StoreName,
    #[sea_orm(iden = "storeNumber")]
    StoreNumber,
    #[sea_orm(iden = "location")]
    Location,
}

#[derive(DeriveIden)]
pub(crate) enum Product {
    #[sea_orm(iden = "PRODUCT")]
    Table,
    #[sea_orm(iden = "productID")]
    ProductId,
    #[sea_orm(iden = "productName")]
    ProductName,
    #[sea_orm(iden = "cost")]
    Cost,
    #[sea_orm(iden = "description")]
    Description,
    #[sea_orm(iden = "quality")]
    Quality,
    #[sea_orm(iden = "storeID")]
    StoreId,
    #[sea_orm(iden = "supplierID")]
    SupplierId,
}
