use std::sync::Arc;

use sea_orm::{EntityTrait, JoinType, QueryOrder, QuerySelect, RelationTrait};
use tracing::instrument;

use crate::{
    db::DbPool,
    entities::{attendance, employee},
    errors::ServiceError,
    views::AttendanceView,
};

/// Read-only access to clock-in records
#[derive(Clone)]
pub struct AttendanceService {
    db_pool: Arc<DbPool>,
}

impl AttendanceService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Attendance newest first, joined to the employee's name
    #[instrument(skip(self))]
    pub async fn list_attendance(&self) -> Result<Vec<AttendanceView>, ServiceError> {
        let records = attendance::Entity::find()
            .select_only()
            .column_as(attendance::Column::AttendanceId, "attendance_id")
            .column_as(attendance::Column::EmployeeId, "employee_id")
            .column_as(attendance::Column::Date, "date")
            .column_as(attendance::Column::TimeIn, "time_in")
            .column_as(attendance::Column::TimeOut, "time_out")
            .column_as(employee::Column::FirstName, "first_name")
            .column_as(employee::Column::LastName, "last_name")
            .join(JoinType::LeftJoin, attendance::Relation::Employee.def())
            .order_by_desc(attendance::Column::Date)
            .order_by_desc(attendance::Column::AttendanceId)
            .into_model::<AttendanceView>()
            .all(&*self.db_pool)
            .await?;
        Ok(records)
    }
}
