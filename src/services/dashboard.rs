use std::sync::Arc;

use rust_decimal::{prelude::ToPrimitive, Decimal};
use sea_orm::{
    sea_query::{Expr, SimpleExpr},
    ConnectionTrait, DbBackend, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use tracing::{debug, instrument};

use crate::{
    db::DbPool,
    entities::{customer, employee, invoice, order, product, sale, store, supplier},
    errors::ServiceError,
    views::DashboardStats,
};

/// Number of trailing days counted as "recent" sales, today included
pub const RECENT_SALES_DAYS: u32 = 7;

/// Aggregates the headline counters shown on the dashboard
#[derive(Clone)]
pub struct DashboardService {
    db_pool: Arc<DbPool>,
}

impl DashboardService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn get_stats(&self) -> Result<DashboardStats, ServiceError> {
        let db = &*self.db_pool;

        let (suppliers, stores, products, employees, customers, orders, total_revenue, recent_sales) =
            tokio::try_join!(
                supplier::Entity::find().count(db),
                store::Entity::find().count(db),
                product::Entity::find().count(db),
                employee::Entity::find().count(db),
                customer::Entity::find().count(db),
                order::Entity::find().count(db),
                self.total_revenue(),
                self.recent_sales(),
            )?;

        let stats = DashboardStats {
            suppliers,
            stores,
            products,
            employees,
            customers,
            orders,
            total_revenue,
            recent_sales,
        };
        debug!(?stats, "Dashboard stats computed");
        Ok(stats)
    }

    /// Sum of every invoice total, 0 when there are none
    async fn total_revenue(&self) -> Result<f64, sea_orm::DbErr> {
        let sum: Option<Option<Decimal>> = invoice::Entity::find()
            .select_only()
            .column_as(
                Expr::col((invoice::Entity, invoice::Column::TotalAmount)).sum(),
                "total_revenue",
            )
            .into_tuple()
            .one(&*self.db_pool)
            .await?;

        Ok(sum
            .flatten()
            .and_then(|total| total.to_f64())
            .unwrap_or(0.0))
    }

    async fn recent_sales(&self) -> Result<u64, sea_orm::DbErr> {
        let db = &*self.db_pool;
        let cutoff = recent_sales_cutoff(db.get_database_backend());
        sale::Entity::find()
            .filter(Expr::col((sale::Entity, sale::Column::Date)).gte(cutoff))
            .count(db)
            .await
    }
}

/// The store's current date minus the recent-sales window, in its own dialect
fn recent_sales_cutoff(backend: DbBackend) -> SimpleExpr {
    let days = RECENT_SALES_DAYS;
    match backend {
        DbBackend::MySql => Expr::cust(format!("DATE_SUB(CURDATE(), INTERVAL {days} DAY)")),
        DbBackend::Postgres => Expr::cust(format!("CURRENT_DATE - INTERVAL '{days} days'")),
        _ => Expr::cust(format!("date('now', '-{days} days')")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{QueryTrait, Statement};

    fn cutoff_sql(backend: DbBackend) -> String {
        let Statement { sql, .. } = sale::Entity::find()
            .filter(Expr::col((sale::Entity, sale::Column::Date)).gte(recent_sales_cutoff(backend)))
            .build(backend);
        sql
    }

    #[test]
    fn cutoff_uses_each_dialect() {
        assert!(cutoff_sql(DbBackend::MySql).contains("DATE_SUB(CURDATE(), INTERVAL 7 DAY)"));
        assert!(cutoff_sql(DbBackend::Postgres).contains("CURRENT_DATE - INTERVAL '7 days'"));
        assert!(cutoff_sql(DbBackend::Sqlite).contains("date('now', '-7 days')"));
    }
}
