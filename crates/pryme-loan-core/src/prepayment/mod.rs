pub mod heuristic;
pub mod simulation;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LoanEngineError;
use crate::types::Rate;
use crate::LoanEngineResult;

/// Prepayment levers a borrower can commit to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepaymentStrategy {
    /// Pay one extra installment at the end of every loan year.
    pub extra_annual_installment: bool,
    /// Raise the installment by this percentage at every year boundary.
    /// Zero disables the lever. The platform's standard preset is 5.
    pub annual_step_up_pct: Rate,
}

impl PrepaymentStrategy {
    pub fn step_up_enabled(&self) -> bool {
        self.annual_step_up_pct > Decimal::ZERO
    }

    pub fn any_lever_active(&self) -> bool {
        self.extra_annual_installment || self.step_up_enabled()
    }

    pub fn validate(&self) -> LoanEngineResult<()> {
        if self.annual_step_up_pct < Decimal::ZERO {
            return Err(LoanEngineError::InvalidInput {
                field: "annual_step_up_pct".into(),
                reason: "Step-up percentage cannot be negative.".into(),
            });
        }
        Ok(())
    }
}
