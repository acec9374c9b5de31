//! Fixed-multiplier prepayment savings estimate.
//!
//! The platform's interactive estimate: savings are fractions of the
//! baseline interest rather than a month-by-month recompute, tuned so the
//! figures land in the band the levers historically deliver. For the exact
//! run, see [`crate::prepayment::simulation`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity;
use crate::prepayment::PrepaymentStrategy;
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Interest saved by one extra installment per year, as a fraction of
/// baseline interest.
const EXTRA_INSTALLMENT_INTEREST_FACTOR: Decimal = dec!(0.16);

/// Tenure reduction from one extra installment per year, as a fraction of
/// the original tenure.
const EXTRA_INSTALLMENT_TENURE_FACTOR: Decimal = dec!(0.15);

/// Interest saved by a yearly step-up, as a fraction of baseline interest.
const STEP_UP_INTEREST_FACTOR: Decimal = dec!(0.22);

/// Tenure reduction from a yearly step-up, as a fraction of the original
/// tenure.
const STEP_UP_TENURE_FACTOR: Decimal = dec!(0.20);

/// Combined savings never exceed this fraction of baseline interest.
const MAX_INTEREST_SAVINGS_FACTOR: Decimal = dec!(0.45);

/// Tenure reduction never shortens a loan below this many months.
const MIN_RESIDUAL_TENURE_MONTHS: i64 = 24;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsEstimateInput {
    pub terms: LoanTerms,
    pub strategy: PrepaymentStrategy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureReduction {
    pub years: u32,
    pub months: u32,
}

/// Estimated savings, whole-rupee rounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsEstimate {
    pub regular_emi: Money,
    pub regular_total_interest: Money,
    pub interest_saved: Money,
    pub months_saved: u32,
    pub new_total_interest: Money,
    pub new_tenure_months: u32,
    pub tenure_reduced: TenureReduction,
    /// The extra installment committed each year, zero when the lever is off.
    pub yearly_extra_payment: Money,
    pub first_year_emi: Money,
    /// Installment in the final loan year after all step-ups.
    pub last_year_emi: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate prepayment savings with the fixed-multiplier shortcut.
pub fn estimate_savings(
    input: &SavingsEstimateInput,
) -> LoanEngineResult<ComputationOutput<SavingsEstimate>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.strategy.validate()?;
    let terms = &input.terms;
    let emi = annuity::installment(terms)?;

    let tenure = Decimal::from(terms.tenure_months);
    let regular_total = emi * tenure;
    let regular_interest = regular_total - terms.principal;

    let mut interest_saved = Decimal::ZERO;
    let mut months_saved = Decimal::ZERO;

    if input.strategy.extra_annual_installment {
        interest_saved += regular_interest * EXTRA_INSTALLMENT_INTEREST_FACTOR;
        months_saved += round_half_up(tenure * EXTRA_INSTALLMENT_TENURE_FACTOR);
    }

    if input.strategy.step_up_enabled() {
        interest_saved += regular_interest * STEP_UP_INTEREST_FACTOR;
        months_saved += round_half_up(tenure * STEP_UP_TENURE_FACTOR);
    }

    interest_saved = interest_saved.min(regular_interest * MAX_INTEREST_SAVINGS_FACTOR);

    let tenure_headroom = terms.tenure_months as i64 - MIN_RESIDUAL_TENURE_MONTHS;
    let mut months_saved = months_saved.to_i64().unwrap_or(0).min(tenure_headroom);
    if months_saved < 0 {
        months_saved = 0;
        if input.strategy.any_lever_active() {
            warnings.push(format!(
                "Tenure of {} months leaves no room for tenure reduction.",
                terms.tenure_months
            ));
        }
    }
    let months_saved = months_saved as u32;

    warnings.push(
        "Fixed-multiplier approximation; run the month-by-month simulation for exact figures."
            .into(),
    );

    let last_year_emi = if input.strategy.step_up_enabled() {
        let step_ups = ((terms.tenure_months - 1) / 12) as i64;
        let growth = Decimal::ONE + input.strategy.annual_step_up_pct / dec!(100);
        emi * growth.powi(step_ups)
    } else {
        emi
    };

    let output = SavingsEstimate {
        regular_emi: annuity::round_rupee(emi),
        regular_total_interest: annuity::round_rupee(regular_interest),
        interest_saved: annuity::round_rupee(interest_saved),
        months_saved,
        new_total_interest: annuity::round_rupee(regular_interest - interest_saved),
        new_tenure_months: terms.tenure_months - months_saved,
        tenure_reduced: TenureReduction {
            years: months_saved / 12,
            months: months_saved % 12,
        },
        yearly_extra_payment: if input.strategy.extra_annual_installment {
            annuity::round_rupee(emi)
        } else {
            Decimal::ZERO
        },
        first_year_emi: annuity::round_rupee(emi),
        last_year_emi: annuity::round_rupee(last_year_emi),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "extra_installment_factors": {
            "interest": EXTRA_INSTALLMENT_INTEREST_FACTOR.to_string(),
            "tenure": EXTRA_INSTALLMENT_TENURE_FACTOR.to_string(),
        },
        "step_up_factors": {
            "interest": STEP_UP_INTEREST_FACTOR.to_string(),
            "tenure": STEP_UP_TENURE_FACTOR.to_string(),
        },
        "interest_savings_cap": MAX_INTEREST_SAVINGS_FACTOR.to_string(),
        "min_residual_tenure_months": MIN_RESIDUAL_TENURE_MONTHS,
    });

    Ok(with_metadata(
        "Prepayment savings (fixed-multiplier estimate)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
