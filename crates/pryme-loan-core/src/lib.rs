pub mod annuity;
pub mod error;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "prepayment")]
pub mod prepayment;

#[cfg(feature = "eligibility")]
pub mod eligibility;

#[cfg(feature = "rewards")]
pub mod rewards;

pub use error::LoanEngineError;
pub use types::*;

/// Standard result type for all loan-engine operations
pub type LoanEngineResult<T> = Result<T, LoanEngineError>;
