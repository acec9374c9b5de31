#![cfg(feature = "eligibility")]

use pretty_assertions::assert_eq;
use pryme_loan_core::eligibility::foir::{self, QuickEligibilityInput};
use pryme_loan_core::eligibility::profile::{self, ApprovalTier, LoanType, ProfileInput};
use pryme_loan_core::eligibility::Occupation;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Quick FOIR check tests
// ===========================================================================

fn salaried_applicant() -> QuickEligibilityInput {
    QuickEligibilityInput {
        monthly_income: dec!(75_000),
        occupation: Occupation::Salaried,
        existing_obligations: dec!(15_000),
    }
}

#[test]
fn test_salaried_max_sanction() {
    let decision = foir::check_eligibility(&salaried_applicant()).unwrap().result;

    // Headroom 75,000 × 0.5 − 15,000 = 22,500; inverted at 8.5% / 240
    // months: 22,500 × ((1+r)^240 − 1)/(r(1+r)^240) = 2,592,693.90
    assert_eq!(decision.max_serviceable_emi, dec!(22_500));
    assert_eq!(decision.max_loan_amount, dec!(2_592_694));
    assert!(decision.eligible);
}

#[test]
fn test_zero_headroom_not_eligible() {
    let input = QuickEligibilityInput {
        monthly_income: dec!(20_000),
        occupation: Occupation::SelfEmployed,
        existing_obligations: dec!(9_000),
    };
    // 20,000 × 0.4 − 9,000 = −1,000
    let decision = foir::check_eligibility(&input).unwrap().result;
    assert!(!decision.eligible);
    assert_eq!(decision.max_loan_amount, Decimal::ZERO);
    assert_eq!(decision.max_serviceable_emi, Decimal::ZERO);
}

#[test]
fn test_sanction_below_viability_threshold() {
    // Headroom 800 services well under the 100,000 minimum
    let input = QuickEligibilityInput {
        monthly_income: dec!(20_000),
        occupation: Occupation::Salaried,
        existing_obligations: dec!(9_200),
    };
    let decision = foir::check_eligibility(&input).unwrap().result;
    assert!(!decision.eligible);
    assert!(decision.max_loan_amount > Decimal::ZERO);
    assert!(decision.max_loan_amount < dec!(100_000));
}

#[test]
fn test_occupation_foir_ladder() {
    // Same income and obligations, three occupations: salaried clears the
    // most headroom, self-employed the least.
    let mut sanctions = Vec::new();
    for occupation in [
        Occupation::SelfEmployed,
        Occupation::Professional,
        Occupation::Salaried,
    ] {
        let decision = foir::check_eligibility(&QuickEligibilityInput {
            monthly_income: dec!(100_000),
            occupation,
            existing_obligations: dec!(10_000),
        })
        .unwrap()
        .result;
        sanctions.push(decision.max_loan_amount);
    }
    assert!(sanctions[0] < sanctions[1]);
    assert!(sanctions[1] < sanctions[2]);
}

// ===========================================================================
// Profile assessment tests
// ===========================================================================

fn clean_home_applicant() -> ProfileInput {
    ProfileInput {
        monthly_income: dec!(75_000),
        occupation: Occupation::Salaried,
        existing_obligations: dec!(15_000),
        age: 35,
        credit_score: Some(760),
        loan_type: Some(LoanType::Home),
    }
}

#[test]
fn test_home_loan_uses_thirty_year_assumption() {
    let assessment = profile::assess_profile(&clean_home_applicant())
        .unwrap()
        .result;

    // Same 22,500 headroom inverted at 8.5% over 360 months: 2,926,206.98
    assert_eq!(assessment.max_loan_amount, dec!(2_926_207));
    assert_eq!(assessment.assumed_rate_pct, dec!(8.5));
    assert_eq!(assessment.assumed_tenure_months, 360);
    assert_eq!(assessment.approval_tier, ApprovalTier::High);
}

#[test]
fn test_unspecified_loan_type_default_assumption() {
    let mut input = clean_home_applicant();
    input.loan_type = None;
    let assessment = profile::assess_profile(&input).unwrap().result;

    // 10% over 240 months: 22,500 × annuity factor = 2,331,553.92
    assert_eq!(assessment.max_loan_amount, dec!(2_331_554));
    assert_eq!(assessment.assumed_rate_pct, dec!(10));
    assert_eq!(assessment.assumed_tenure_months, 240);
}

#[test]
fn test_personal_loan_short_tenure_caps_sanction() {
    let mut input = clean_home_applicant();
    input.loan_type = Some(LoanType::Personal);
    let assessment = profile::assess_profile(&input).unwrap().result;

    // 12% over only 60 months: 1,011,488.36
    assert_eq!(assessment.max_loan_amount, dec!(1_011_488));
}

#[test]
fn test_weak_credit_score_costs_a_tier() {
    let mut input = clean_home_applicant();
    input.credit_score = Some(680);
    let assessment = profile::assess_profile(&input).unwrap().result;
    assert_eq!(assessment.approval_tier, ApprovalTier::Medium);
    assert_eq!(assessment.reasons, vec!["Credit score can be improved"]);
}

#[test]
fn test_missing_credit_score_skips_rule() {
    let mut input = clean_home_applicant();
    input.credit_score = None;
    let assessment = profile::assess_profile(&input).unwrap().result;
    assert_eq!(assessment.approval_tier, ApprovalTier::High);
    assert_eq!(assessment.reasons, vec!["All eligibility criteria met"]);
}

#[test]
fn test_reasons_accumulate_worst_tier_wins() {
    let input = ProfileInput {
        monthly_income: dec!(18_000),
        occupation: Occupation::Salaried,
        existing_obligations: Decimal::ZERO,
        age: 65,
        credit_score: Some(620),
        loan_type: None,
    };
    let assessment = profile::assess_profile(&input).unwrap().result;
    assert_eq!(assessment.approval_tier, ApprovalTier::Low);
    assert_eq!(
        assessment.reasons,
        vec![
            "Credit score below 650",
            "Age outside preferred range (21-60)",
            "Income below preferred threshold",
        ]
    );
}

#[test]
fn test_debt_burden_dominates() {
    let input = ProfileInput {
        monthly_income: dec!(30_000),
        occupation: Occupation::SelfEmployed,
        existing_obligations: dec!(12_000),
        age: 40,
        credit_score: Some(800),
        loan_type: Some(LoanType::Home),
    };
    // 30,000 × 0.4 − 12,000 = 0
    let assessment = profile::assess_profile(&input).unwrap().result;
    assert!(!assessment.eligible);
    assert_eq!(assessment.approval_tier, ApprovalTier::Low);
    assert_eq!(assessment.reasons, vec!["High existing debt burden"]);
}
