//! Exact prepayment simulation.
//!
//! Runs the loan month by month under the chosen levers: interest accrues on
//! the live balance, every 12th month optionally carries one extra
//! installment, and the installment steps up at year boundaries while a
//! balance remains. The final payment is capped at balance plus interest.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity;
use crate::prepayment::PrepaymentStrategy;
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationInput {
    pub terms: LoanTerms,
    pub strategy: PrepaymentStrategy,
}

/// Outcome of the month-by-month run, whole-rupee rounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub regular_emi: Money,
    pub regular_total_interest: Money,
    /// Interest actually paid under the strategy.
    pub new_total_interest: Money,
    pub interest_saved: Money,
    pub original_tenure_months: u32,
    /// Months until the balance reached zero.
    pub new_tenure_months: u32,
    pub months_saved: u32,
    pub yearly_extra_payment: Money,
    pub first_year_emi: Money,
    /// The installment in force when the loan closed.
    pub last_year_emi: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Simulate the loan under the prepayment strategy and report the exact
/// savings against the regular run.
pub fn simulate_prepayment(
    input: &SimulationInput,
) -> LoanEngineResult<ComputationOutput<SimulationOutcome>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.strategy.validate()?;
    let terms = &input.terms;
    let emi = annuity::installment(terms)?;

    let regular_total = emi * Decimal::from(terms.tenure_months);
    let regular_interest = regular_total - terms.principal;

    if !input.strategy.any_lever_active() {
        warnings.push("No prepayment lever active; outcome equals the regular run.".into());
    }

    let run = run_months(terms, emi, &input.strategy);

    let output = SimulationOutcome {
        regular_emi: annuity::round_rupee(emi),
        regular_total_interest: annuity::round_rupee(regular_interest),
        new_total_interest: annuity::round_rupee(run.total_interest),
        interest_saved: annuity::round_rupee(regular_interest - run.total_interest),
        original_tenure_months: terms.tenure_months,
        new_tenure_months: run.months_taken,
        months_saved: terms.tenure_months - run.months_taken,
        yearly_extra_payment: if input.strategy.extra_annual_installment {
            annuity::round_rupee(emi)
        } else {
            Decimal::ZERO
        },
        first_year_emi: annuity::round_rupee(emi),
        last_year_emi: annuity::round_rupee(run.last_installment),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "extra_installment_month": "every 12th month, at the prevailing installment",
        "step_up_timing": "applied at year boundaries while a balance remains",
        "annual_step_up_pct": input.strategy.annual_step_up_pct.to_string(),
    });

    Ok(with_metadata(
        "Prepayment savings (month-by-month simulation)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

struct RunResult {
    total_interest: Decimal,
    months_taken: u32,
    last_installment: Decimal,
}

fn run_months(terms: &LoanTerms, emi: Decimal, strategy: &PrepaymentStrategy) -> RunResult {
    let r = annuity::monthly_rate(terms.annual_rate_pct);
    let growth = Decimal::ONE + strategy.annual_step_up_pct / dec!(100);

    let mut balance = terms.principal;
    let mut total_interest = Decimal::ZERO;
    let mut current_emi = emi;
    let mut month: u32 = 0;

    while balance > Decimal::ZERO && month < terms.tenure_months {
        month += 1;

        let interest = balance * r;
        total_interest += interest;

        let mut payment = current_emi;
        if strategy.extra_annual_installment && month % 12 == 0 {
            payment += current_emi;
        }

        let total_due = balance + interest;
        if payment >= total_due {
            balance = Decimal::ZERO;
        } else {
            balance -= payment - interest;
        }

        if strategy.step_up_enabled() && month % 12 == 0 && balance > Decimal::ZERO {
            current_emi *= growth;
        }
    }

    RunResult {
        total_interest,
        months_taken: month,
        last_installment: current_emi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn home_loan() -> LoanTerms {
        LoanTerms {
            principal: dec!(5_000_000),
            annual_rate_pct: dec!(8.5),
            tenure_months: 240,
        }
    }

    #[test]
    fn test_no_levers_reproduces_regular_run() {
        let input = SimulationInput {
            terms: home_loan(),
            strategy: PrepaymentStrategy::default(),
        };
        let result = simulate_prepayment(&input).unwrap().result;
        assert_eq!(result.new_tenure_months, 240);
        assert_eq!(result.months_saved, 0);
        // Regular run pays regular interest, bar final-payment rounding
        assert!((result.new_total_interest - result.regular_total_interest).abs() <= dec!(1));
    }

    #[test]
    fn test_extra_installment_shortens_loan() {
        let input = SimulationInput {
            terms: home_loan(),
            strategy: PrepaymentStrategy {
                extra_annual_installment: true,
                annual_step_up_pct: Decimal::ZERO,
            },
        };
        let result = simulate_prepayment(&input).unwrap().result;
        assert!(result.new_tenure_months < 240);
        assert!(result.interest_saved > Decimal::ZERO);
        // EMI never steps up without the step-up lever
        assert_eq!(result.last_year_emi, result.regular_emi);
    }

    #[test]
    fn test_step_up_compounds_installment() {
        let input = SimulationInput {
            terms: home_loan(),
            strategy: PrepaymentStrategy {
                extra_annual_installment: false,
                annual_step_up_pct: dec!(5),
            },
        };
        let result = simulate_prepayment(&input).unwrap().result;
        assert!(result.last_year_emi > result.regular_emi);
        assert!(result.new_tenure_months < 240);
    }
}
