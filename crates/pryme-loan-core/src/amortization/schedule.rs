//! Month-by-month amortization schedule.
//!
//! Splits every installment into its interest and principal components and
//! tracks the outstanding balance down to zero. The final installment pays
//! exactly the remaining balance plus accrued interest, so the schedule
//! closes clean rather than overshooting by a few paise.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity;
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money};
use crate::LoanEngineResult;

/// Balance below which the loan is considered fully repaid.
const BALANCE_EPSILON: Decimal = dec!(0.01);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub terms: LoanTerms,
    /// Date of the first installment. When present, each row carries its
    /// payment date advanced by calendar months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
}

/// One repayment period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based installment number.
    pub period: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    pub opening_balance: Money,
    pub installment: Money,
    pub interest_component: Money,
    pub principal_component: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<ScheduleRow>,
    pub monthly_installment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the full amortization schedule for a loan.
pub fn build_schedule(
    input: &ScheduleInput,
) -> LoanEngineResult<ComputationOutput<AmortizationSchedule>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    let terms = &input.terms;
    let emi = annuity::installment(terms)?;
    let r = annuity::monthly_rate(terms.annual_rate_pct);

    let mut rows = Vec::with_capacity(terms.tenure_months as usize);
    let mut balance = terms.principal;
    let mut total_interest = Decimal::ZERO;
    let mut total_payment = Decimal::ZERO;

    for period in 1..=terms.tenure_months {
        if balance < BALANCE_EPSILON {
            break;
        }

        let interest = balance * r;
        let mut payment = emi;
        let principal_component;

        if period == terms.tenure_months || payment >= balance + interest {
            // Last period: settle the remaining balance exactly.
            payment = balance + interest;
            principal_component = balance;
            balance = Decimal::ZERO;
        } else {
            principal_component = payment - interest;
            balance -= principal_component;
        }

        total_interest += interest;
        total_payment += payment;

        let payment_date = input
            .first_payment_date
            .and_then(|d| d.checked_add_months(Months::new(period - 1)));

        rows.push(ScheduleRow {
            period,
            payment_date,
            opening_balance: annuity::round_paise(principal_component + balance),
            installment: annuity::round_paise(payment),
            interest_component: annuity::round_paise(interest),
            principal_component: annuity::round_paise(principal_component),
            closing_balance: annuity::round_paise(balance),
        });
    }

    let output = AmortizationSchedule {
        rows,
        monthly_installment: annuity::round_rupee(emi),
        total_payment: annuity::round_rupee(total_payment),
        total_interest: annuity::round_rupee(total_interest),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "compounding": "monthly",
        "final_installment": "capped at remaining balance plus interest",
    });

    Ok(with_metadata(
        "Reducing-balance amortization schedule",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn short_loan() -> ScheduleInput {
        ScheduleInput {
            terms: LoanTerms {
                principal: dec!(100_000),
                annual_rate_pct: dec!(12),
                tenure_months: 12,
            },
            first_payment_date: None,
        }
    }

    #[test]
    fn test_schedule_closes_at_zero() {
        let schedule = build_schedule(&short_loan()).unwrap().result;
        assert_eq!(schedule.rows.len(), 12);
        assert_eq!(schedule.rows.last().unwrap().closing_balance, Decimal::ZERO);
    }

    #[test]
    fn test_components_sum_to_installment() {
        let schedule = build_schedule(&short_loan()).unwrap().result;
        for row in &schedule.rows {
            let sum = row.interest_component + row.principal_component;
            assert!((sum - row.installment).abs() < dec!(0.02), "period {}", row.period);
        }
    }

    #[test]
    fn test_interest_declines_over_time() {
        let schedule = build_schedule(&short_loan()).unwrap().result;
        let first = schedule.rows.first().unwrap().interest_component;
        let last = schedule.rows.last().unwrap().interest_component;
        assert!(first > last);
    }

    #[test]
    fn test_payment_dates_advance_monthly() {
        let mut input = short_loan();
        input.first_payment_date = NaiveDate::from_ymd_opt(2026, 1, 5);
        let schedule = build_schedule(&input).unwrap().result;
        assert_eq!(
            schedule.rows[0].payment_date,
            NaiveDate::from_ymd_opt(2026, 1, 5)
        );
        assert_eq!(
            schedule.rows[11].payment_date,
            NaiveDate::from_ymd_opt(2026, 12, 5)
        );
    }
}
