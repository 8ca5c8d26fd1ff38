use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240601_000004_create_payment_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentMethod::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaymentMethod::PaymentMethodId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PaymentMethod::Cash).boolean().not_null().default(false))
                    .col(ColumnDef::new(PaymentMethod::Momo).boolean().not_null().default(false))
                    .col(ColumnDef::new(PaymentMethod::Bank).boolean().not_null().default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payment::PaymentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payment::PaymentDate).date().null())
                    .col(ColumnDef::new(Payment::Amount).decimal_len(12, 2).null())
                    .col(ColumnDef::new(Payment::Time).time().null())
                    .col(ColumnDef::new(Payment::Method).string().null())
                    .col(ColumnDef::new(Payment::PaymentMethodId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_method")
                            .from(Payment::Table, Payment::PaymentMethodId)
                            .to(PaymentMethod::Table, PaymentMethod::PaymentMethodId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PaymentMethod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PaymentMethod {
    #[sea_orm(iden = "PAYMENTMETHOD")]
    Table,
    #[sea_orm(iden = "paymentMethodID")]
    PaymentMethodId,
    #[sea_orm(iden = "cash")]
    Cash,
    #[sea_orm(iden = "momo")]
    Momo,
    #[sea_orm(iden = "bank")]
    Bank,
}

#[derive(DeriveIden)]
enum Payment {
    #[sea_orm(iden = "PAYMENT")]
    Table,
    #[sea_orm(iden = "paymentID")]
    PaymentId,
    #[sea_orm(iden = "paymentDate")]
    PaymentDate,
    #[sea_orm(iden = "amount")]
    Amount,
    #[sea_orm(iden = "time")]
    Time,
    #[sea_orm(iden = "method")]
    Method,
    #[sea_orm(iden = "paymentMethodID")]
    PaymentMethodId,
}
