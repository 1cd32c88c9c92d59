//! Debt repayment simulation.
//!
//! Simulates the month-by-month payoff of a set of interest-bearing debts
//! under a chosen repayment strategy, producing a full amortization schedule
//! and summary totals. Each call is a pure, stateless computation over its
//! inputs.

pub mod engine;
pub mod error;
pub mod strategy;
pub mod types;


#[cfg(test)]
mod props;

pub use engine::RepaymentEngine;
pub use error::RepaymentError;
pub use strategy::Strategy;
pub use types::{Debt, PaymentDetail, PaymentMonth, RepaymentPlan, RepaymentRequest};
