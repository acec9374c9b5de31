use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let terms: pryme_loan_core::types::LoanTerms =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        pryme_loan_core::amortization::emi::calculate_emi(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: pryme_loan_core::amortization::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pryme_loan_core::amortization::schedule::build_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Prepayment
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_prepayment_savings(input_json: String) -> NapiResult<String> {
    let input: pryme_loan_core::prepayment::heuristic::SavingsEstimateInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pryme_loan_core::prepayment::heuristic::estimate_savings(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_prepayment(input_json: String) -> NapiResult<String> {
    let input: pryme_loan_core::prepayment::simulation::SimulationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pryme_loan_core::prepayment::simulation::simulate_prepayment(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

#[napi]
pub fn check_eligibility(input_json: String) -> NapiResult<String> {
    let input: pryme_loan_core::eligibility::foir::QuickEligibilityInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pryme_loan_core::eligibility::foir::check_eligibility(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn assess_eligibility_profile(input_json: String) -> NapiResult<String> {
    let input: pryme_loan_core::eligibility::profile::ProfileInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        pryme_loan_core::eligibility::profile::assess_profile(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Rewards
// ---------------------------------------------------------------------------

#[napi]
pub fn rank_card_rewards(input_json: String) -> NapiResult<String> {
    let input: pryme_loan_core::rewards::card_rewards::RewardsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pryme_loan_core::rewards::card_rewards::rank_card_rewards(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
