//! Repayment error types.

use thiserror::Error;

/// Repayment-related errors.
///
/// All variants are detected before the simulation loop starts; there is no
/// recoverable error inside the loop itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepaymentError {
    /// No debts were supplied.
    #[error("No debts provided")]
    EmptyDebtSet,

    /// The extra monthly payment is negative.
    #[error("Extra payment must be >= 0")]
    NegativeExtraPayment,

    /// The repayment method is not one of the recognized strategies.
    #[error("Invalid repayment method: {0}")]
    InvalidStrategy(String),
}
