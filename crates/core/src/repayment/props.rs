//! Property-based tests for the repayment engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::RepaymentEngine;
use super::types::{Debt, RepaymentRequest};

/// Strategy to generate a debt with cent-scaled balance and minimum payment
/// and a basis-point-scaled apr (0% to 40%).
fn any_debt() -> impl Strategy<Value = Debt> {
    ("[A-Z][a-z]{2,8}", 0i64..2_000_000, 0i64..4000, 0i64..100_000).prop_map(
        |(name, balance_cents, apr_bps, min_cents)| Debt {
            name,
            balance: Decimal::new(balance_cents, 2),
            apr: Decimal::new(apr_bps, 2),
            min_payment: Decimal::new(min_cents, 2),
        },
    )
}

/// Strategy to generate a debt whose minimum payment always covers the
/// monthly interest: apr at most 30% (2.5% monthly) with a minimum of at
/// least 3% of the starting balance, so the balance shrinks every month.
fn amortizing_debt() -> impl Strategy<Value = Debt> {
    ("[A-Z][a-z]{2,8}", 100i64..2_000_000, 0i64..3000).prop_map(
        |(name, balance_cents, apr_bps)| Debt {
            name,
            balance: Decimal::new(balance_cents, 2),
            apr: Decimal::new(apr_bps, 2),
            min_payment: Decimal::new(balance_cents * 3 / 100 + 1, 2),
        },
    )
}

fn any_method() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("avalanche".to_string()),
        Just("snowball".to_string()),
        Just(" Avalanche ".to_string()),
        Just("SNOWBALL".to_string()),
    ]
}

proptest! {
    /// For all valid inputs, months equals the schedule length and the
    /// interest total is non-negative.
    #[test]
    fn prop_months_matches_schedule_length(
        debts in prop::collection::vec(any_debt(), 1..5),
        extra_cents in 0i64..500_000,
        method in any_method(),
    ) {
        let plan = RepaymentEngine::plan(&RepaymentRequest {
            debts,
            extra_payment: Decimal::new(extra_cents, 2),
            method,
        })
        .unwrap();

        prop_assert_eq!(plan.months as usize, plan.schedule.len());
        prop_assert!(plan.total_interest_paid >= Decimal::ZERO);
    }

    /// Every month lists exactly one detail per input debt, in input order.
    #[test]
    fn prop_every_month_covers_every_debt_in_order(
        debts in prop::collection::vec(any_debt(), 1..5),
        extra_cents in 0i64..500_000,
        method in any_method(),
    ) {
        let names: Vec<String> = debts.iter().map(|d| d.name.clone()).collect();
        let plan = RepaymentEngine::plan(&RepaymentRequest {
            debts,
            extra_payment: Decimal::new(extra_cents, 2),
            method,
        })
        .unwrap();

        for month in &plan.schedule {
            let month_names: Vec<String> =
                month.payments.iter().map(|p| p.debt_name.clone()).collect();
            prop_assert_eq!(&month_names, &names);
        }
    }

    /// When minimums always cover the monthly interest, every debt's
    /// remaining balance is monotonically non-increasing month over month
    /// and never negative.
    #[test]
    fn prop_balances_are_monotone_under_sufficient_minimums(
        debts in prop::collection::vec(amortizing_debt(), 1..5),
        extra_cents in 0i64..500_000,
        method in any_method(),
    ) {
        let plan = RepaymentEngine::plan(&RepaymentRequest {
            debts,
            extra_payment: Decimal::new(extra_cents, 2),
            method,
        })
        .unwrap();

        prop_assert!(!plan.capped);
        for window in plan.schedule.windows(2) {
            for (prev, next) in window[0].payments.iter().zip(&window[1].payments) {
                prop_assert!(next.remaining_balance <= prev.remaining_balance);
                prop_assert!(next.remaining_balance >= Decimal::ZERO);
            }
        }
    }

    /// Once a debt's balance hits zero it stays zero for the rest of the
    /// schedule, with all-zero payment details.
    #[test]
    fn prop_settled_debts_never_reaccrue(
        debts in prop::collection::vec(any_debt(), 1..5),
        extra_cents in 0i64..500_000,
        method in any_method(),
    ) {
        let debt_count = debts.len();
        let plan = RepaymentEngine::plan(&RepaymentRequest {
            debts,
            extra_payment: Decimal::new(extra_cents, 2),
            method,
        })
        .unwrap();

        for idx in 0..debt_count {
            let mut settled = false;
            for month in &plan.schedule {
                let detail = &month.payments[idx];
                if settled {
                    prop_assert_eq!(detail.remaining_balance, Decimal::ZERO);
                    prop_assert_eq!(detail.payment, Decimal::ZERO);
                    prop_assert_eq!(detail.interest, Decimal::ZERO);
                }
                if detail.remaining_balance == Decimal::ZERO {
                    settled = true;
                }
            }
        }
    }

    /// Identical inputs (same values, distinct objects) yield identical
    /// plans.
    #[test]
    fn prop_plan_is_deterministic(
        debts in prop::collection::vec(any_debt(), 1..4),
        extra_cents in 0i64..200_000,
        method in any_method(),
    ) {
        let make = || RepaymentRequest {
            debts: debts.clone(),
            extra_payment: Decimal::new(extra_cents, 2),
            method: method.clone(),
        };
        let first = RepaymentEngine::plan(&make()).unwrap();
        let second = RepaymentEngine::plan(&make()).unwrap();
        prop_assert_eq!(first, second);
    }
}
