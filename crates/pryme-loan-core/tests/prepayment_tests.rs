#![cfg(feature = "prepayment")]

use pryme_loan_core::prepayment::heuristic::{self, SavingsEstimateInput};
use pryme_loan_core::prepayment::simulation::{self, SimulationInput};
use pryme_loan_core::prepayment::PrepaymentStrategy;
use pryme_loan_core::types::LoanTerms;
use pryme_loan_core::LoanEngineError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn standard_home_loan() -> LoanTerms {
    LoanTerms {
        principal: dec!(5_000_000),
        annual_rate_pct: dec!(8.5),
        tenure_months: 240,
    }
}

fn thirteenth_emi_only() -> PrepaymentStrategy {
    PrepaymentStrategy {
        extra_annual_installment: true,
        annual_step_up_pct: Decimal::ZERO,
    }
}

fn step_up_only() -> PrepaymentStrategy {
    PrepaymentStrategy {
        extra_annual_installment: false,
        annual_step_up_pct: dec!(5),
    }
}

// ===========================================================================
// Heuristic estimate tests
// ===========================================================================

#[test]
fn test_heuristic_thirteenth_emi() {
    let input = SavingsEstimateInput {
        terms: standard_home_loan(),
        strategy: thirteenth_emi_only(),
    };
    let est = heuristic::estimate_savings(&input).unwrap().result;

    // Baseline interest 5,413,878.80; × 0.16 = 866,220.61
    assert_eq!(est.interest_saved, dec!(866_221));
    // round(240 × 0.15) = 36
    assert_eq!(est.months_saved, 36);
    assert_eq!(est.new_tenure_months, 204);
    assert_eq!(est.tenure_reduced.years, 3);
    assert_eq!(est.tenure_reduced.months, 0);
    assert_eq!(est.new_total_interest, dec!(4_547_658));
    assert_eq!(est.yearly_extra_payment, dec!(43_391));
    assert_eq!(est.last_year_emi, est.regular_emi);
}

#[test]
fn test_heuristic_both_levers() {
    let input = SavingsEstimateInput {
        terms: standard_home_loan(),
        strategy: PrepaymentStrategy {
            extra_annual_installment: true,
            annual_step_up_pct: dec!(5),
        },
    };
    let est = heuristic::estimate_savings(&input).unwrap().result;

    // (0.16 + 0.22) × 5,413,878.80 = 2,057,273.94, under the 45% cap
    assert_eq!(est.interest_saved, dec!(2_057_274));
    // round(240 × 0.15) + round(240 × 0.20) = 36 + 48 = 84, cap 216
    assert_eq!(est.months_saved, 84);
    assert_eq!(est.new_tenure_months, 156);
    assert!(est.last_year_emi > est.regular_emi);
}

#[test]
fn test_heuristic_tenure_cap_binds() {
    // 36 months: raw reduction 5 + 7 = 12 equals the 36 − 24 headroom
    let input = SavingsEstimateInput {
        terms: LoanTerms {
            principal: dec!(600_000),
            annual_rate_pct: dec!(10),
            tenure_months: 36,
        },
        strategy: PrepaymentStrategy {
            extra_annual_installment: true,
            annual_step_up_pct: dec!(5),
        },
    };
    let est = heuristic::estimate_savings(&input).unwrap().result;
    assert_eq!(est.months_saved, 12);
    assert_eq!(est.new_tenure_months, 24);
}

#[test]
fn test_heuristic_negative_step_up_rejected() {
    let input = SavingsEstimateInput {
        terms: standard_home_loan(),
        strategy: PrepaymentStrategy {
            extra_annual_installment: false,
            annual_step_up_pct: dec!(-5),
        },
    };
    let err = heuristic::estimate_savings(&input).unwrap_err();
    match err {
        LoanEngineError::InvalidInput { field, .. } => assert_eq!(field, "annual_step_up_pct"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

// ===========================================================================
// Simulation tests
// ===========================================================================

#[test]
fn test_simulation_thirteenth_emi() {
    let input = SimulationInput {
        terms: standard_home_loan(),
        strategy: thirteenth_emi_only(),
    };
    let run = simulation::simulate_prepayment(&input).unwrap().result;

    // One extra installment per year closes the loan in 201 months
    assert_eq!(run.new_tenure_months, 201);
    assert_eq!(run.months_saved, 39);
    assert!((run.interest_saved - dec!(1_029_139)).abs() <= dec!(5));
    assert_eq!(run.last_year_emi, dec!(43_391));
}

#[test]
fn test_simulation_step_up() {
    let input = SimulationInput {
        terms: standard_home_loan(),
        strategy: step_up_only(),
    };
    let run = simulation::simulate_prepayment(&input).unwrap().result;

    // 5% yearly step-ups close the loan in 147 months
    assert_eq!(run.new_tenure_months, 147);
    assert!((run.interest_saved - dec!(1_951_712)).abs() <= dec!(5));
    // Installment after 12 step-ups: 43,391.16 × 1.05^12 = 77,924
    assert!((run.last_year_emi - dec!(77_924)).abs() <= dec!(2));
}

#[test]
fn test_simulation_both_levers() {
    let input = SimulationInput {
        terms: standard_home_loan(),
        strategy: PrepaymentStrategy {
            extra_annual_installment: true,
            annual_step_up_pct: dec!(5),
        },
    };
    let run = simulation::simulate_prepayment(&input).unwrap().result;
    assert_eq!(run.new_tenure_months, 133);
    assert!((run.interest_saved - dec!(2_326_841)).abs() <= dec!(5));
}

#[test]
fn test_simulation_beats_nothing() {
    let terms = standard_home_loan();
    let idle = simulation::simulate_prepayment(&SimulationInput {
        terms: terms.clone(),
        strategy: PrepaymentStrategy::default(),
    })
    .unwrap()
    .result;
    let active = simulation::simulate_prepayment(&SimulationInput {
        terms,
        strategy: thirteenth_emi_only(),
    })
    .unwrap()
    .result;

    assert_eq!(idle.months_saved, 0);
    assert!(active.new_total_interest < idle.new_total_interest);
}

#[test]
fn test_simulation_idempotent() {
    let input = SimulationInput {
        terms: standard_home_loan(),
        strategy: step_up_only(),
    };
    let first = simulation::simulate_prepayment(&input).unwrap().result;
    let second = simulation::simulate_prepayment(&input).unwrap().result;
    assert_eq!(first.new_total_interest, second.new_total_interest);
    assert_eq!(first.new_tenure_months, second.new_tenure_months);
}
