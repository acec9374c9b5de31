//! Full applicant profile assessment.
//!
//! Extends the quick FOIR check with loan-type-specific rate/tenure
//! assumptions and an approval-confidence tier. The tier starts at High and
//! only ever downgrades; every rule that fires appends its reason, so an
//! applicant sees the complete picture rather than the first problem found.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::eligibility::{foir, Occupation};
use crate::error::LoanEngineError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Scores below this are a hard tier downgrade.
const CREDIT_SCORE_FLOOR: u32 = 650;

/// Scores below this still cost a tier.
const CREDIT_SCORE_STRONG: u32 = 700;

/// Preferred applicant age band, inclusive.
const MIN_AGE: u32 = 21;
const MAX_AGE: u32 = 60;

/// Monthly income below this costs a tier.
const INCOME_FLOOR: Decimal = dec!(20_000);

/// CIBIL score band.
const CREDIT_SCORE_MIN: u32 = 300;
const CREDIT_SCORE_MAX: u32 = 900;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Product the applicant is asking about. Each carries its own underwriting
/// assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanType {
    Home,
    Personal,
    Business,
    Other,
}

/// Rate and tenure a product is underwritten at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanAssumptions {
    pub annual_rate_pct: Rate,
    pub max_tenure_months: u32,
}

impl LoanType {
    pub fn assumptions(self) -> LoanAssumptions {
        match self {
            LoanType::Home => LoanAssumptions {
                annual_rate_pct: dec!(8.5),
                max_tenure_months: 360,
            },
            LoanType::Personal => LoanAssumptions {
                annual_rate_pct: dec!(12),
                max_tenure_months: 60,
            },
            LoanType::Business => LoanAssumptions {
                annual_rate_pct: dec!(14),
                max_tenure_months: 84,
            },
            LoanType::Other => LoanAssumptions {
                annual_rate_pct: dec!(10),
                max_tenure_months: 240,
            },
        }
    }
}

/// Approval-confidence tier. Ordered by severity: High < Medium < Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalTier {
    High,
    Medium,
    Low,
}

impl ApprovalTier {
    /// Tiers only ever move down.
    fn downgrade_to(&mut self, floor: ApprovalTier) {
        if floor > *self {
            *self = floor;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub monthly_income: Money,
    pub occupation: Occupation,
    pub existing_obligations: Money,
    pub age: u32,
    /// CIBIL score, when the applicant knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<LoanType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAssessment {
    pub eligible: bool,
    pub max_loan_amount: Money,
    pub max_serviceable_emi: Money,
    pub approval_tier: ApprovalTier,
    /// Every rule that fired, or a single all-clear line.
    pub reasons: Vec<String>,
    pub assumed_rate_pct: Rate,
    pub assumed_tenure_months: u32,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Assess a full applicant profile.
pub fn assess_profile(
    input: &ProfileInput,
) -> LoanEngineResult<ComputationOutput<ProfileAssessment>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let assumptions = input.loan_type.unwrap_or(LoanType::Other).assumptions();

    let headroom =
        input.monthly_income * input.occupation.max_foir() - input.existing_obligations;

    let assessment = if headroom <= Decimal::ZERO {
        ProfileAssessment {
            eligible: false,
            max_loan_amount: Decimal::ZERO,
            max_serviceable_emi: Decimal::ZERO,
            approval_tier: ApprovalTier::Low,
            reasons: vec!["High existing debt burden".into()],
            assumed_rate_pct: assumptions.annual_rate_pct,
            assumed_tenure_months: assumptions.max_tenure_months,
        }
    } else {
        let decision = foir::decide(
            input.monthly_income,
            input.occupation,
            input.existing_obligations,
            assumptions.annual_rate_pct,
            assumptions.max_tenure_months,
        )?;
        let (tier, reasons) = grade_profile(input);
        ProfileAssessment {
            eligible: decision.eligible,
            max_loan_amount: decision.max_loan_amount,
            max_serviceable_emi: decision.max_serviceable_emi,
            approval_tier: tier,
            reasons,
            assumed_rate_pct: assumptions.annual_rate_pct,
            assumed_tenure_months: assumptions.max_tenure_months,
        }
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions_json = serde_json::json!({
        "loan_type": input.loan_type.map(|t| format!("{t:?}")).unwrap_or_else(|| "unspecified".into()),
        "annual_rate_pct": assessment.assumed_rate_pct.to_string(),
        "tenure_months": assessment.assumed_tenure_months,
        "max_foir": input.occupation.max_foir().to_string(),
    });

    Ok(with_metadata(
        "FOIR eligibility with approval-tier grading",
        &assumptions_json,
        warnings,
        elapsed,
        assessment,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Apply the downgrade rules. Reasons accumulate; they never short-circuit.
fn grade_profile(input: &ProfileInput) -> (ApprovalTier, Vec<String>) {
    let mut tier = ApprovalTier::High;
    let mut reasons: Vec<String> = Vec::new();

    if let Some(score) = input.credit_score {
        if score < CREDIT_SCORE_FLOOR {
            tier.downgrade_to(ApprovalTier::Low);
            reasons.push(format!("Credit score below {CREDIT_SCORE_FLOOR}"));
        } else if score < CREDIT_SCORE_STRONG {
            tier.downgrade_to(ApprovalTier::Medium);
            reasons.push("Credit score can be improved".into());
        }
    }

    if input.age < MIN_AGE || input.age > MAX_AGE {
        tier.downgrade_to(ApprovalTier::Low);
        reasons.push(format!("Age outside preferred range ({MIN_AGE}-{MAX_AGE})"));
    }

    if input.monthly_income < INCOME_FLOOR {
        tier.downgrade_to(ApprovalTier::Medium);
        reasons.push("Income below preferred threshold".into());
    }

    if reasons.is_empty() {
        reasons.push("All eligibility criteria met".into());
    }

    (tier, reasons)
}

fn validate_input(input: &ProfileInput) -> LoanEngineResult<()> {
    foir::validate_input(&foir::QuickEligibilityInput {
        monthly_income: input.monthly_income,
        occupation: input.occupation,
        existing_obligations: input.existing_obligations,
    })?;

    if input.age == 0 {
        return Err(LoanEngineError::InvalidInput {
            field: "age".into(),
            reason: "Age is required.".into(),
        });
    }

    if let Some(score) = input.credit_score {
        if !(CREDIT_SCORE_MIN..=CREDIT_SCORE_MAX).contains(&score) {
            return Err(LoanEngineError::InvalidInput {
                field: "credit_score".into(),
                reason: format!(
                    "Credit score must be between {CREDIT_SCORE_MIN} and {CREDIT_SCORE_MAX}."
                ),
            });
        }
    }

    Ok(())
}
