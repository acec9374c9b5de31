use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LoanEngineError;
use crate::LoanEngineResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Interest rates. Fields named `_pct` hold percentages (8.5 = 8.5%);
/// everything else holds fractions (0.5 = 50%).
pub type Rate = Decimal;

/// The loan triple every amortization-style computation starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed, in whole currency units.
    pub principal: Money,
    /// Annual nominal interest rate as a percentage (e.g. 8.5 for 8.5%).
    pub annual_rate_pct: Rate,
    /// Repayment duration in months.
    pub tenure_months: u32,
}

impl LoanTerms {
    pub fn validate(&self) -> LoanEngineResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(LoanEngineError::InvalidInput {
                field: "principal".into(),
                reason: "Principal must be positive.".into(),
            });
        }
        if self.annual_rate_pct < Decimal::ZERO {
            return Err(LoanEngineError::InvalidInput {
                field: "annual_rate_pct".into(),
                reason: "Interest rate cannot be negative.".into(),
            });
        }
        if self.tenure_months == 0 {
            return Err(LoanEngineError::InvalidInput {
                field: "tenure_months".into(),
                reason: "Tenure must be at least one month.".into(),
            });
        }
        Ok(())
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
