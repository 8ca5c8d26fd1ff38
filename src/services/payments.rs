use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, JoinType, NotSet, QueryOrder, QuerySelect, RelationTrait, Set};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{
    db::DbPool,
    entities::{payment, payment_method},
    errors::ServiceError,
    form,
    views::PaymentView,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    #[serde(default, deserialize_with = "form::opt_date")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "form::opt_decimal")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "form::opt_time")]
    pub time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "form::opt_string")]
    pub method: Option<String>,
    #[serde(default, rename = "paymentMethodID", deserialize_with = "form::opt_i32")]
    pub payment_method_id: Option<i32>,
}

impl From<PaymentInput> for payment::ActiveModel {
    fn from(input: PaymentInput) -> Self {
        payment::ActiveModel {
            payment_id: NotSet,
            payment_date: Set(input.payment_date),
            amount: Set(input.amount),
            time: Set(input.time),
            method: Set(input.method),
            payment_method_id: Set(input.payment_method_id),
        }
    }
}

/// Received payments; list and create only
#[derive(Clone)]
pub struct PaymentService {
    db_pool: Arc<DbPool>,
}

impl PaymentService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Payments newest first with the tender flags of their payment method
    #[instrument(skip(self))]
    pub async fn list_payments(&self) -> Result<Vec<PaymentView>, ServiceError> {
        let payments = payment::Entity::find()
            .select_only()
            .column_as(payment::Column::PaymentId, "payment_id")
            .column_as(payment::Column::PaymentDate, "payment_date")
            .column_as(payment::Column::Amount, "amount")
            .column_as(payment::Column::Time, "time")
            .column_as(payment::Column::Method, "method")
            .column_as(payment::Column::PaymentMethodId, "payment_method_id")
            .column_as(payment_method::Column::Cash, "cash")
            .column_as(payment_method::Column::Momo, "momo")
            .column_as(payment_method::Column::Bank, "bank")
            .join(JoinType::LeftJoin, payment::Relation::PaymentMethod.def())
            .order_by_desc(payment::Column::PaymentDate)
            .order_by_desc(payment::Column::PaymentId)
            .into_model::<PaymentView>()
            .all(&*self.db_pool)
            .await?;
        Ok(payments)
    }

    #[instrument(skip(self, input))]
    pub async fn create_payment(&self, input: PaymentInput) -> Result<i32, ServiceError> {
        let model: payment::ActiveModel = input.into();
        let result = payment::Entity::insert(model).exec(&*self.db_pool).await?;
        info!(payment_id = result.last_insert_id, "Payment recorded");
        Ok(result.last_insert_id)
    }
}
