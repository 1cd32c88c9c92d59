//! Repayment data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single interest-bearing debt as supplied by the caller.
///
/// Never mutated by the engine; the simulation works on its own copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// Debt name, used as the lookup key in the schedule.
    pub name: String,
    /// Current outstanding balance (non-negative).
    pub balance: Decimal,
    /// Annual percentage rate, expressed as a percent (18.5 means 18.5%).
    pub apr: Decimal,
    /// Minimum monthly payment (non-negative).
    pub min_payment: Decimal,
}

/// Parameters for a repayment plan calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentRequest {
    /// Debts to simulate, in caller-supplied order.
    pub debts: Vec<Debt>,
    /// Extra payment budget applied every month on top of minimums.
    pub extra_payment: Decimal,
    /// Repayment method name ("avalanche" or "snowball", case-insensitive).
    pub method: String,
}

/// Per-debt payment breakdown for one simulated month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetail {
    /// Name of the debt this detail belongs to.
    pub debt_name: String,
    /// Total amount paid against the debt this month.
    pub payment: Decimal,
    /// Interest accrued on the debt this month (informational).
    ///
    /// Interest capitalizes into the balance before any payment applies, so
    /// `payment == principal`; the authoritative interest total lives on
    /// [`RepaymentPlan::total_interest_paid`].
    pub interest: Decimal,
    /// Portion of the payment applied to the balance.
    pub principal: Decimal,
    /// Balance remaining after the month's payments.
    pub remaining_balance: Decimal,
}

impl PaymentDetail {
    /// An all-zero placeholder for a debt that is already paid off.
    #[must_use]
    pub fn settled(debt_name: &str) -> Self {
        Self {
            debt_name: debt_name.to_string(),
            payment: Decimal::ZERO,
            interest: Decimal::ZERO,
            principal: Decimal::ZERO,
            remaining_balance: Decimal::ZERO,
        }
    }
}

/// One simulated month: a 1-based month index plus one payment detail per
/// input debt, in the original input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMonth {
    /// Month index, starting at 1 with no gaps.
    pub month: u32,
    /// Payment details, one per input debt regardless of payoff status.
    pub payments: Vec<PaymentDetail>,
}

/// Result of a repayment plan calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentPlan {
    /// Number of months simulated; always equals `schedule.len()`.
    pub months: u32,
    /// Cumulative interest accrued across all debts and months (2 dp).
    pub total_interest_paid: Decimal,
    /// Whether the simulation stopped at the safety cap with debt remaining.
    pub capped: bool,
    /// Month-by-month amortization schedule, in month order.
    pub schedule: Vec<PaymentMonth>,
}
