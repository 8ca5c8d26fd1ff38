use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_catalog_tables::Store;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240601_000002_create_staff_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Position::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Position::PositionId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Position::Name).string().null())
                    .col(ColumnDef::new(Position::Description).text().null())
                    .col(ColumnDef::new(Position::Duty).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::EmployeeId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employee::FirstName).string().null())
                    .col(ColumnDef::new(Employee::MiddleName).string().null())
                    .col(ColumnDef::new(Employee::LastName).string().null())
                    .col(ColumnDef::new(Employee::Phonenumber).string().null())
                    .col(ColumnDef::new(Employee::Email).string().null())
                    .col(ColumnDef::new(Employee::StoreId).integer().null())
                    .col(ColumnDef::new(Employee::Gender).string_len(16).null())
                    .col(ColumnDef::new(Employee::Address).string().null())
                    .col(ColumnDef::new(Employee::PositionId).integer().null())
                    .col(ColumnDef::new(Employee::Dob).date().null())
                    .col(ColumnDef::new(Employee::Salary).decimal_len(12, 2).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_store")
                            .from(Employee::Table, Employee::StoreId)
                            .to(Store::Table, Store::StoreId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_position")
                            .from(Employee::Table, Employee::PositionId)
                            .to(Position::Table, Position::PositionId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::AttendanceId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::EmployeeId).integer().null())
                    .col(ColumnDef::new(Attendance::Date).date().null())
                    .col(ColumnDef::new(Attendance::TimeIn).time().null())
                    .col(ColumnDef::new(Attendance::TimeOut).time().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_employee")
                            .from(Attendance::Table, Attendance::EmployeeId)
                            .to(Employee::Table, Employee::EmployeeId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Position::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Position {
    #[sea_orm(iden = "POSITION")]
    Table,
    #[sea_orm(iden = "positionID")]
    PositionId,
    #[sea_orm(iden = "name")]
    Name,
    #[sea_orm(iden = "description")]
    Description,
    #[sea_orm(iden = "duty")]
    Duty,
}

#[derive(DeriveIden)]
enum Employee {
    #[sea_orm(iden = "EMPLOYEE")]
    Table,
    #[sea_orm(iden = "employeeID")]
    EmployeeId,
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
    #[sea_orm(iden = "storeID")]
    StoreId,
    #[sea_orm(iden = "gender")]
    Gender,
    #[sea_orm(iden = "address")]
    Address,
    #[sea_orm(iden = "positionID")]
    PositionId,
    #[sea_orm(iden = "dob")]
    Dob,
    #[sea_orm(iden = "salary")]
    Salary,
}

#[derive(DeriveIden)]
enum Attendance {
    #[sea_orm(iden = "ATTENDANCE")]
    Table,
    #[sea_orm(iden = "attendanceID")]
    AttendanceId,
    #[sea_orm(iden = "employeeID")]
    EmployeeId,
    #[sea_orm(iden = "date")]
    Date,
    #[sea_orm(iden = "timeIn")]
    TimeIn,
    #[sea_orm(iden = "timeOut")]
    TimeOut,
}
