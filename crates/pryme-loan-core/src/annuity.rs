use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::LoanEngineError;
use crate::types::{LoanTerms, Money, Rate};
use crate::LoanEngineResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Convert an annual percentage rate into a monthly fraction.
/// 8.5 becomes 0.007083...
pub fn monthly_rate(annual_rate_pct: Rate) -> Rate {
    annual_rate_pct / MONTHS_PER_YEAR / PERCENT
}

/// Fixed-rate reducing-balance installment, full precision:
/// P·r·(1+r)^n / ((1+r)^n − 1). A zero rate degenerates to P / n.
pub fn installment(terms: &LoanTerms) -> LoanEngineResult<Money> {
    terms.validate()?;

    let r = monthly_rate(terms.annual_rate_pct);
    let n = Decimal::from(terms.tenure_months);

    if r.is_zero() {
        return Ok(terms.principal / n);
    }

    let factor = (Decimal::ONE + r).powi(terms.tenure_months as i64);
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(LoanEngineError::DivisionByZero {
            context: "installment annuity factor".into(),
        });
    }

    Ok(terms.principal * r * factor / denominator)
}

/// Invert the installment formula: the principal a given monthly payment can
/// service over `tenure_months` at `annual_rate_pct`:
/// E·((1+r)^n − 1) / (r·(1+r)^n). A zero rate degenerates to E·n.
pub fn principal_from_installment(
    payment: Money,
    annual_rate_pct: Rate,
    tenure_months: u32,
) -> LoanEngineResult<Money> {
    if payment <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "payment".into(),
            reason: "Monthly payment must be positive.".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    if tenure_months == 0 {
        return Err(LoanEngineError::InvalidInput {
            field: "tenure_months".into(),
            reason: "Tenure must be at least one month.".into(),
        });
    }

    let r = monthly_rate(annual_rate_pct);
    let n = Decimal::from(tenure_months);

    if r.is_zero() {
        return Ok(payment * n);
    }

    let factor = (Decimal::ONE + r).powi(tenure_months as i64);
    let denominator = r * factor;
    if denominator.is_zero() {
        return Err(LoanEngineError::DivisionByZero {
            context: "principal inversion denominator".into(),
        });
    }

    Ok(payment * (factor - Decimal::ONE) / denominator)
}

/// Round to whole rupees, half-up. The display convention for EMIs and
/// sanction amounts.
pub fn round_rupee(amount: Money) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to paise (2 dp), half-up. Used for schedule rows.
pub fn round_paise(amount: Money) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
