//! Table models for the supermarket schema.
//!
//! Column names keep the historical camelCase spelling with an upper-case
//! `ID` suffix, so every field carries an explicit `column_name` and the
//! JSON representation matches the stored column name.

pub mod attendance;
pub mod customer;
pub mod employee;
pub mod invoice;
pub mod order;
pub mod payment;
pub mod payment_method;
pub mod position;
pub mod product;
pub mod sale;
pub mod store;
pub mod supplier;
