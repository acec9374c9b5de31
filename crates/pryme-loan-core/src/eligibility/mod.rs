pub mod foir;
pub mod profile;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Rate;

/// Minimum sanction below which an application is not worth underwriting.
pub const MIN_VIABLE_LOAN: Decimal = dec!(100_000);

/// Borrower occupation class. Drives the FOIR ceiling lenders apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occupation {
    Salaried,
    SelfEmployed,
    Professional,
}

impl Occupation {
    /// Fraction of monthly income assumed available for debt service.
    pub fn max_foir(self) -> Rate {
        match self {
            Occupation::Salaried => dec!(0.50),
            Occupation::SelfEmployed => dec!(0.40),
            Occupation::Professional => dec!(0.45),
        }
    }
}
