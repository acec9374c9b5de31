//! Quick FOIR eligibility check.
//!
//! Income times the occupation's FOIR ceiling, minus existing obligations,
//! gives the EMI headroom; inverting the annuity at the standard assumption
//! turns that headroom into a maximum sanction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity;
use crate::eligibility::{Occupation, MIN_VIABLE_LOAN};
use crate::error::LoanEngineError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Rate assumed when no loan type is in play.
const ASSUMED_ANNUAL_RATE_PCT: Decimal = dec!(8.5);

/// Tenure assumed when no loan type is in play.
const ASSUMED_TENURE_MONTHS: u32 = 240;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickEligibilityInput {
    pub monthly_income: Money,
    pub occupation: Occupation,
    /// EMIs already being serviced each month.
    pub existing_obligations: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub eligible: bool,
    /// Largest sanction the headroom can service, whole-rupee rounded.
    pub max_loan_amount: Money,
    /// EMI headroom after existing obligations, whole-rupee rounded.
    pub max_serviceable_emi: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the quick FOIR check at the standard 8.5% / 240-month assumption.
pub fn check_eligibility(
    input: &QuickEligibilityInput,
) -> LoanEngineResult<ComputationOutput<EligibilityDecision>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let decision = decide(
        input.monthly_income,
        input.occupation,
        input.existing_obligations,
        ASSUMED_ANNUAL_RATE_PCT,
        ASSUMED_TENURE_MONTHS,
    )?;

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "annual_rate_pct": ASSUMED_ANNUAL_RATE_PCT.to_string(),
        "tenure_months": ASSUMED_TENURE_MONTHS,
        "max_foir": input.occupation.max_foir().to_string(),
        "min_viable_loan": MIN_VIABLE_LOAN.to_string(),
    });

    Ok(with_metadata(
        "FOIR eligibility (quick check)",
        &assumptions,
        warnings,
        elapsed,
        decision,
    ))
}

/// Shared decision core: headroom, annuity inversion, viability threshold.
pub(crate) fn decide(
    monthly_income: Money,
    occupation: Occupation,
    existing_obligations: Money,
    annual_rate_pct: Rate,
    tenure_months: u32,
) -> LoanEngineResult<EligibilityDecision> {
    let headroom = monthly_income * occupation.max_foir() - existing_obligations;

    if headroom <= Decimal::ZERO {
        return Ok(EligibilityDecision {
            eligible: false,
            max_loan_amount: Decimal::ZERO,
            max_serviceable_emi: Decimal::ZERO,
        });
    }

    let max_loan = annuity::principal_from_installment(headroom, annual_rate_pct, tenure_months)?;

    Ok(EligibilityDecision {
        eligible: max_loan > MIN_VIABLE_LOAN,
        max_loan_amount: annuity::round_rupee(max_loan),
        max_serviceable_emi: annuity::round_rupee(headroom),
    })
}

pub(crate) fn validate_input(input: &QuickEligibilityInput) -> LoanEngineResult<()> {
    if input.monthly_income <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "monthly_income".into(),
            reason: "Monthly income must be positive.".into(),
        });
    }
    if input.existing_obligations < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "existing_obligations".into(),
            reason: "Existing obligations cannot be negative.".into(),
        });
    }
    Ok(())
}
