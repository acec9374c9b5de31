//! Equated monthly installment breakdown.
//!
//! The headline numbers behind every loan card on the platform: the monthly
//! installment, what the loan costs in total, and how much of that is
//! interest. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity;
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// EMI breakdown, whole-rupee rounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiBreakdown {
    /// Fixed monthly installment.
    pub monthly_installment: Money,
    /// Installment × tenure.
    pub total_payment: Money,
    /// Total payment minus principal.
    pub total_interest: Money,
    /// Principal echoed back for breakdown charts.
    pub principal: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the EMI breakdown for a loan.
///
/// Totals are computed from the full-precision installment and only the
/// final figures are rounded, so `total_interest` stays consistent with
/// `total_payment − principal` to within a rupee.
pub fn calculate_emi(terms: &LoanTerms) -> LoanEngineResult<ComputationOutput<EmiBreakdown>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let emi = annuity::installment(terms)?;
    let total_payment = emi * Decimal::from(terms.tenure_months);
    let total_interest = total_payment - terms.principal;

    if terms.annual_rate_pct.is_zero() {
        warnings.push("Zero interest rate: installment is principal / tenure.".into());
    }

    let output = EmiBreakdown {
        monthly_installment: annuity::round_rupee(emi),
        total_payment: annuity::round_rupee(total_payment),
        total_interest: annuity::round_rupee(total_interest),
        principal: terms.principal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "compounding": "monthly",
        "rounding": "half-up to whole rupees",
    });

    Ok(with_metadata(
        "Reducing-balance EMI",
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

    #[test]
    fn test_breakdown_totals_consistent() {
        let terms = LoanTerms {
            principal: dec!(1_000_000),
            annual_rate_pct: dec!(10),
            tenure_months: 120,
        };
        let result = calculate_emi(&terms).unwrap().result;
        // Rounded totals may disagree by at most one rupee
        assert!(
            (result.total_payment - result.principal - result.total_interest).abs() <= dec!(1)
        );
        assert!(result.total_payment >= result.principal);
    }

    #[test]
    fn test_zero_rate_warns() {
        let terms = LoanTerms {
            principal: dec!(240_000),
            annual_rate_pct: Decimal::ZERO,
            tenure_months: 24,
        };
        let result = calculate_emi(&terms).unwrap();
        assert_eq!(result.result.monthly_installment, dec!(10_000));
        assert_eq!(result.result.total_interest, Decimal::ZERO);
        assert!(!result.warnings.is_empty());
    }
}
