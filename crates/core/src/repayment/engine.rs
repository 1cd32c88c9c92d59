//! Repayment simulation engine.
//!
//! One invocation is a single sequential computation: validate, build the
//! working set, then loop month by month (accrue interest, pay minimums,
//! cascade the extra budget, record the month) until every balance is zero
//! or the safety cap is reached.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::RepaymentError;
use super::strategy::Strategy;
use super::types::{PaymentDetail, PaymentMonth, RepaymentPlan, RepaymentRequest};

/// Monetary scale: 2 fractional digits, rounded half-up.
const MONEY_SCALE: u32 = 2;

/// Intermediate scale for monthly rates, kept high so per-month rounding
/// error does not compound over long schedules.
const RATE_SCALE: u32 = 10;

/// Safety cap on simulated months (50 years).
///
/// Guarantees termination when minimums plus the extra budget never reduce
/// the total debt. Hitting the cap is reported via [`RepaymentPlan::capped`],
/// not as an error; the truncated schedule is returned as-is.
pub const MAX_MONTHS: u32 = 600;

/// Run-local mutable copy of a debt.
///
/// Owned exclusively by one simulation run; the caller's [`super::Debt`]
/// records are never aliased or mutated.
struct WorkingDebt {
    name: String,
    balance: Decimal,
    apr: Decimal,
    min_payment: Decimal,
    /// Interest accrued in the current month, zero once paid off.
    accrued: Decimal,
}

impl WorkingDebt {
    fn is_active(&self) -> bool {
        self.balance > Decimal::ZERO
    }
}

/// Rounds a monetary amount to [`MONEY_SCALE`] digits, half-up.
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an intermediate rate to [`RATE_SCALE`] digits, half-up.
fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Derives the monthly rate from an annual percentage rate.
fn monthly_rate(apr: Decimal) -> Decimal {
    round_rate(round_rate(apr / Decimal::ONE_HUNDRED) / Decimal::from(12u32))
}

/// Engine for calculating repayment plans.
pub struct RepaymentEngine;

impl RepaymentEngine {
    /// Calculates the full repayment plan for a request.
    ///
    /// The computation is pure and deterministic: identical inputs always
    /// produce identical plans, and the request is never mutated.
    ///
    /// # Errors
    ///
    /// Returns a [`RepaymentError`] when the debt list is empty, the extra
    /// payment is negative, or the method is not a recognized strategy. All
    /// validation happens before the first simulated month.
    pub fn plan(request: &RepaymentRequest) -> Result<RepaymentPlan, RepaymentError> {
        if request.debts.is_empty() {
            return Err(RepaymentError::EmptyDebtSet);
        }
        if request.extra_payment < Decimal::ZERO {
            return Err(RepaymentError::NegativeExtraPayment);
        }
        let strategy = Strategy::parse(&request.method)?;

        // Working set: monetary fields normalized to 2 dp, apr kept at full
        // precision (rounding is deferred to the derived monthly rate).
        let mut working: Vec<WorkingDebt> = request
            .debts
            .iter()
            .map(|d| WorkingDebt {
                name: d.name.clone(),
                balance: round_money(d.balance),
                apr: d.apr,
                min_payment: round_money(d.min_payment),
                accrued: Decimal::ZERO,
            })
            .collect();

        let mut schedule = Vec::new();
        let mut month = 0u32;
        let mut total_interest_paid = Decimal::ZERO;

        while working.iter().any(WorkingDebt::is_active) && month < MAX_MONTHS {
            month += 1;

            total_interest_paid = Self::accrue_interest(&mut working, total_interest_paid);
            let mut payments = Self::pay_minimums(&mut working);
            let allocations = Self::cascade_extra(&mut working, strategy, request.extra_payment);
            Self::finalize_month(&working, &mut payments, &allocations);

            schedule.push(PaymentMonth { month, payments });
        }

        let capped = working.iter().any(WorkingDebt::is_active);

        Ok(RepaymentPlan {
            months: month,
            total_interest_paid: round_money(total_interest_paid),
            capped,
            schedule,
        })
    }

    /// Applies one month of interest to every active debt.
    ///
    /// Interest capitalizes into the balance; paid-off debts accrue nothing.
    /// Returns the updated running interest total.
    fn accrue_interest(working: &mut [WorkingDebt], mut total: Decimal) -> Decimal {
        for debt in working.iter_mut() {
            if !debt.is_active() {
                debt.accrued = Decimal::ZERO;
                continue;
            }
            let interest = round_money(debt.balance * monthly_rate(debt.apr));
            debt.balance = round_money(debt.balance + interest);
            debt.accrued = interest;
            total = round_money(total + interest);
        }
        total
    }

    /// Applies each debt's minimum payment, capped at its current balance.
    ///
    /// Paid-off debts emit an all-zero placeholder. The returned details are
    /// provisional: the extra cascade has not run yet.
    fn pay_minimums(working: &mut [WorkingDebt]) -> Vec<PaymentDetail> {
        working
            .iter_mut()
            .map(|debt| {
                if !debt.is_active() {
                    return PaymentDetail::settled(&debt.name);
                }
                let base = debt.min_payment.min(debt.balance);
                debt.balance = round_money(debt.balance - base);
                PaymentDetail {
                    debt_name: debt.name.clone(),
                    payment: base,
                    interest: debt.accrued,
                    principal: base,
                    remaining_balance: debt.balance,
                }
            })
            .collect()
    }

    /// Distributes the monthly extra budget across prioritized debts.
    ///
    /// Walks the priority order, paying each debt down to exactly zero before
    /// any budget reaches the next one. Leftover budget after the last active
    /// debt is discarded, never carried into the next month. Returns one
    /// allocation per working debt, zero where none applied.
    fn cascade_extra(
        working: &mut [WorkingDebt],
        strategy: Strategy,
        extra_payment: Decimal,
    ) -> Vec<Decimal> {
        let mut extra = round_money(extra_payment);
        let mut allocations = vec![Decimal::ZERO; working.len()];

        for idx in Self::priority_order(working, strategy) {
            if extra <= Decimal::ZERO {
                break;
            }
            let debt = &mut working[idx];
            if !debt.is_active() {
                continue;
            }
            let allocation = extra.min(debt.balance);
            debt.balance = round_money(debt.balance - allocation);
            extra = round_money(extra - allocation);
            allocations[idx] = allocation;
        }

        allocations
    }

    /// Orders the active debts for extra-payment allocation.
    ///
    /// Avalanche: descending apr. Snowball: ascending balance. Both sorts are
    /// stable, so ties keep the original input order. Recomputed fresh every
    /// month against post-minimum balances.
    fn priority_order(working: &[WorkingDebt], strategy: Strategy) -> Vec<usize> {
        let mut order: Vec<usize> = (0..working.len())
            .filter(|&i| working[i].is_active())
            .collect();
        match strategy {
            Strategy::Avalanche => order.sort_by(|&a, &b| working[b].apr.cmp(&working[a].apr)),
            Strategy::Snowball => {
                order.sort_by(|&a, &b| working[a].balance.cmp(&working[b].balance));
            }
        }
        order
    }

    /// Folds the extra allocations into the provisional details and stamps
    /// each with its debt's post-cascade balance.
    fn finalize_month(
        working: &[WorkingDebt],
        payments: &mut [PaymentDetail],
        allocations: &[Decimal],
    ) {
        for (idx, detail) in payments.iter_mut().enumerate() {
            let allocation = allocations[idx];
            detail.payment = round_money(detail.payment + allocation);
            detail.principal = round_money(detail.principal + allocation);
            detail.remaining_balance = working[idx].balance;
        }
    }
}
