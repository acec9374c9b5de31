pub mod eligibility;
pub mod emi;
pub mod prepayment;
pub mod rewards;
